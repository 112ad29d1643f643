pub mod controllers;
pub mod core;

pub use controllers::interactive::{ExplorerConfig, FractalExplorer};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_point::PixelPoint;
pub use crate::core::data::render_buffer::{EscapeResult, RenderBuffer};
pub use crate::core::data::viewport::{ViewBounds, Viewport};
pub use crate::core::engine::FractalEngine;
pub use crate::core::errors::{FractalError, FractalResult};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::model::FractalModel;
pub use crate::core::fractals::parameters::{FractalParameters, ParameterUpdate};
pub use crate::core::navigation::{
    AnimationTick, Navigator, NavigatorConfig, NavigatorResponse, ZoomDirection,
};
