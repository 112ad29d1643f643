use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;
use crate::core::errors::{FractalError, FractalResult};
use crate::core::fractals::escape::{escape_time, orbit};
use crate::core::fractals::parameters::{
    DEFAULT_MAX_ITERATIONS, FractalParameters, ParameterUpdate,
};

/// `z ← (|Re z| + i|Im z|)² + c`, starting from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> FractalResult<Self> {
        if max_iterations == 0 {
            return Err(FractalError::invalid(
                "max_iter",
                "must be a positive integer, got 0",
            ));
        }

        Ok(Self { max_iterations })
    }

    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        let folded = z.abs_components();
        folded * folded + c
    }
}

impl Default for BurningShipAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalAlgorithm for BurningShipAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute_single(&self, c: Complex) -> EscapeResult {
        escape_time(Complex::ZERO, self.max_iterations, |z| Self::step(z, c))
    }

    fn iterate(&self, c: Complex, steps: u32) -> Complex {
        orbit(Complex::ZERO, steps, |z| Self::step(z, c))
    }

    fn parameters(&self) -> FractalParameters {
        FractalParameters {
            max_iter: self.max_iterations,
            julia_c: None,
        }
    }

    fn set_parameters(&mut self, update: &ParameterUpdate) -> FractalResult<()> {
        if let Some(max_iterations) = update.validated_max_iter()? {
            self.max_iterations = max_iterations;
        }

        Ok(())
    }
}
