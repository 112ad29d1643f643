pub mod burning_ship;
pub(crate) mod escape;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod model;
pub mod parameters;
