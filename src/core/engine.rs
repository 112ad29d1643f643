use std::time::Instant;

use log::info;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::{EscapeResult, RenderBuffer, RenderBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::errors::{FractalError, FractalResult};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::model::FractalModel;
use crate::core::fractals::parameters::{
    DEFAULT_JULIA_C, FractalParameters, ParameterUpdate, validate_julia_c,
};

/// Owns the selected fractal model and turns viewports into render buffers.
///
/// The Julia constant is remembered across family switches so that selecting
/// Julia again restores the last constant the user chose.
#[derive(Debug, Clone)]
pub struct FractalEngine {
    model: FractalModel,
    julia_c: Complex,
}

impl FractalEngine {
    pub fn new(kind: FractalKind, max_iterations: u32, julia_c: Complex) -> FractalResult<Self> {
        let julia_c = validate_julia_c(julia_c)?;
        let model = FractalModel::new(kind, max_iterations, julia_c)?;
        info!(
            "engine configured: {} with max_iter {}",
            kind, max_iterations
        );

        Ok(Self { model, julia_c })
    }

    #[must_use]
    pub fn model(&self) -> &FractalModel {
        &self.model
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.model.kind()
    }

    #[must_use]
    pub fn julia_c(&self) -> Complex {
        self.julia_c
    }

    #[must_use]
    pub fn parameters(&self) -> FractalParameters {
        self.model.parameters()
    }

    #[must_use]
    pub fn compute_point(&self, point: Complex) -> EscapeResult {
        self.model.compute_single(point)
    }

    #[must_use]
    pub fn compute_batch(&self, points: &[Complex]) -> Vec<EscapeResult> {
        self.model.compute_batch(points)
    }

    /// Row-parallel render of every pixel in `viewport`.
    pub fn render(&self, viewport: &Viewport) -> FractalResult<RenderBuffer> {
        let start = Instant::now();
        let buffer = generate_fractal_parallel_rayon(viewport, &self.model).map_err(buffer_error)?;

        info!(
            "rendered {} {}x{} in {:?} ({} of {} cells bounded)",
            self.kind(),
            buffer.width(),
            buffer.height(),
            start.elapsed(),
            buffer.count_bounded(self.model.max_iterations()),
            buffer.cells().len()
        );

        Ok(buffer)
    }

    /// Same output as [`FractalEngine::render`] on the calling thread only.
    pub fn render_serial(&self, viewport: &Viewport) -> FractalResult<RenderBuffer> {
        generate_fractal(viewport, &self.model).map_err(buffer_error)
    }

    /// Applies a partial parameter update. On error nothing changes.
    pub fn set_parameters(&mut self, update: &ParameterUpdate) -> FractalResult<()> {
        let julia_c = update.validated_julia_c(self.julia_c)?;
        self.model.set_parameters(update)?;
        self.julia_c = julia_c;

        info!("parameters updated: {:?}", self.model.parameters());
        Ok(())
    }

    /// Swaps in another family, carrying over `max_iter` and the Julia constant.
    pub fn select(&mut self, kind: FractalKind) -> FractalResult<()> {
        if kind == self.kind() {
            return Ok(());
        }

        self.model = FractalModel::new(kind, self.model.max_iterations(), self.julia_c)?;
        info!("selected {}", kind);
        Ok(())
    }
}

impl Default for FractalEngine {
    fn default() -> Self {
        Self {
            model: FractalModel::Mandelbrot(Default::default()),
            julia_c: DEFAULT_JULIA_C,
        }
    }
}

impl From<FractalModel> for FractalEngine {
    fn from(model: FractalModel) -> Self {
        let julia_c = model.parameters().julia_c.unwrap_or(DEFAULT_JULIA_C);
        Self { model, julia_c }
    }
}

fn buffer_error(err: RenderBufferError) -> FractalError {
    FractalError::invalid("screen_size", err.to_string())
}
