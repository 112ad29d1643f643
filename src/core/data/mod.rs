pub mod complex;
pub mod pixel_point;
pub mod render_buffer;
pub mod viewport;
