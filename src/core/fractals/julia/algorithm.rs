use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;
use crate::core::errors::{FractalError, FractalResult};
use crate::core::fractals::escape::{escape_time, orbit};
use crate::core::fractals::parameters::{
    DEFAULT_JULIA_C, DEFAULT_MAX_ITERATIONS, FractalParameters, ParameterUpdate, validate_julia_c,
};

/// `z ← z² + c` with a fixed `c`, starting from the sampled point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl JuliaAlgorithm {
    pub fn new(c: Complex, max_iterations: u32) -> FractalResult<Self> {
        if max_iterations == 0 {
            return Err(FractalError::invalid(
                "max_iter",
                "must be a positive integer, got 0",
            ));
        }

        Ok(Self {
            c: validate_julia_c(c)?,
            max_iterations,
        })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}

impl Default for JuliaAlgorithm {
    fn default() -> Self {
        Self {
            c: DEFAULT_JULIA_C,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute_single(&self, z0: Complex) -> EscapeResult {
        let c = self.c;
        escape_time(z0, self.max_iterations, |z| z * z + c)
    }

    fn iterate(&self, z0: Complex, steps: u32) -> Complex {
        let c = self.c;
        orbit(z0, steps, |z| z * z + c)
    }

    fn parameters(&self) -> FractalParameters {
        FractalParameters {
            max_iter: self.max_iterations,
            julia_c: Some(self.c),
        }
    }

    fn set_parameters(&mut self, update: &ParameterUpdate) -> FractalResult<()> {
        let max_iterations = update.validated_max_iter()?;
        let c = update.validated_julia_c(self.c)?;

        if let Some(max_iterations) = max_iterations {
            self.max_iterations = max_iterations;
        }
        self.c = c;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constant() {
        let julia = JuliaAlgorithm::default();

        assert_eq!(julia.c(), Complex::new(-0.4, 0.6));
        assert_eq!(julia.max_iterations(), 256);
    }

    #[test]
    fn test_constructor_rejects_zero_budget_and_non_finite_c() {
        assert!(JuliaAlgorithm::new(DEFAULT_JULIA_C, 0).is_err());
        assert!(matches!(
            JuliaAlgorithm::new(Complex::new(f64::NAN, 0.0), 10),
            Err(FractalError::InvalidParameter {
                parameter: "c_real",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_constant_is_repeated_squaring() {
        let julia = JuliaAlgorithm::new(Complex::ZERO, 3).unwrap();

        // 2 → 4 → 16 → 256
        assert_eq!(julia.iterate(Complex::new(2.0, 0.0), 3), Complex::new(256.0, 0.0));
    }

    #[test]
    fn test_zero_constant_escape_count() {
        let julia = JuliaAlgorithm::new(Complex::ZERO, 3).unwrap();
        let result = julia.compute_single(Complex::new(2.0, 0.0));

        assert_eq!(result.iterations, 1);
        assert_eq!(result.final_z, Complex::new(4.0, 0.0));
    }

    #[test]
    fn test_origin_with_zero_constant_stays_put() {
        let julia = JuliaAlgorithm::new(Complex::ZERO, 100).unwrap();
        let result = julia.compute_single(Complex::ZERO);

        assert_eq!(result.iterations, 100);
        assert_eq!(result.final_z, Complex::ZERO);
    }

    #[test]
    fn test_start_outside_radius_escapes_at_zero() {
        let julia = JuliaAlgorithm::default();

        assert_eq!(julia.compute_single(Complex::new(1.5, 1.5)).iterations, 0);
    }

    #[test]
    fn test_parameters_report_constant() {
        let julia = JuliaAlgorithm::new(Complex::new(-0.8, 0.156), 200).unwrap();

        assert_eq!(
            julia.parameters(),
            FractalParameters {
                max_iter: 200,
                julia_c: Some(Complex::new(-0.8, 0.156))
            }
        );
    }

    #[test]
    fn test_set_parameters_partial() {
        let mut julia = JuliaAlgorithm::new(Complex::new(-0.4, 0.6), 100).unwrap();

        julia
            .set_parameters(&ParameterUpdate::default().with_c_real(-0.8))
            .unwrap();

        assert_eq!(julia.c(), Complex::new(-0.8, 0.6));
        assert_eq!(julia.max_iterations(), 100);
    }

    #[test]
    fn test_set_parameters_accepts_range_boundaries() {
        let mut julia = JuliaAlgorithm::default();

        for value in [-2.0, 2.0, 0.0] {
            julia
                .set_parameters(&ParameterUpdate::default().with_c_real(value).with_c_imag(-value))
                .unwrap();
            assert_eq!(julia.c(), Complex::new(value, -value));
        }
    }

    #[test]
    fn test_failed_update_is_atomic() {
        let mut julia = JuliaAlgorithm::new(Complex::new(-0.4, 0.6), 100).unwrap();
        let update = ParameterUpdate::max_iter(50).with_c_imag(f64::INFINITY);

        assert!(julia.set_parameters(&update).is_err());
        assert_eq!(julia.max_iterations(), 100);
        assert_eq!(julia.c(), Complex::new(-0.4, 0.6));
    }
}
