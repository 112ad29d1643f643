use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;
use crate::core::errors::{FractalError, FractalResult};
use crate::core::fractals::escape::{escape_time, orbit};
use crate::core::fractals::parameters::{
    DEFAULT_MAX_ITERATIONS, FractalParameters, ParameterUpdate,
};

/// `z ← z² + c`, starting from `z = 0` with `c` the sampled point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    interior_check: bool,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> FractalResult<Self> {
        if max_iterations == 0 {
            return Err(FractalError::invalid(
                "max_iter",
                "must be a positive integer, got 0",
            ));
        }

        Ok(Self {
            max_iterations,
            interior_check: true,
        })
    }

    /// Turns the cardioid/bulb shortcut of [`FractalAlgorithm::iteration_count`]
    /// on or off. Counts are the same either way, and [`FractalAlgorithm::compute_single`]
    /// always runs the full loop so `final_z` is the true orbit value.
    #[must_use]
    pub fn with_interior_check(mut self, enabled: bool) -> Self {
        self.interior_check = enabled;
        self
    }

    #[must_use]
    pub fn interior_check(&self) -> bool {
        self.interior_check
    }

    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            interior_check: true,
        }
    }
}

/// Closed-form membership test for the main cardioid and the period-2 bulb.
#[must_use]
pub fn in_main_cardioid_or_bulb(c: Complex) -> bool {
    let imag_sq = c.imag * c.imag;

    let x = c.real - 0.25;
    let q = x * x + imag_sq;
    if q * (q + x) <= 0.25 * imag_sq {
        return true;
    }

    let bulb_x = c.real + 1.0;
    bulb_x * bulb_x + imag_sq <= 0.0625
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute_single(&self, c: Complex) -> EscapeResult {
        escape_time(Complex::ZERO, self.max_iterations, |z| Self::step(z, c))
    }

    fn iteration_count(&self, c: Complex) -> u32 {
        if self.interior_check && in_main_cardioid_or_bulb(c) {
            return self.max_iterations;
        }

        self.compute_single(c).iterations
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
