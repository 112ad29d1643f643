use crate::core::data::complex::Complex;
use crate::core::errors::{FractalError, FractalResult};

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Dendrite-shaped member of the Julia family.
pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.4, 0.6);

/// Current parameter values of a model, as reported by `parameters()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    pub max_iter: u32,
    /// Only present for the Julia family.
    pub julia_c: Option<Complex>,
}

/// A partial parameter change. Values are taken wide (`i64`) so that
/// out-of-range input is caught here rather than truncated by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ParameterUpdate {
    pub max_iter: Option<i64>,
    pub c_real: Option<f64>,
    pub c_imag: Option<f64>,
}

impl ParameterUpdate {
    #[must_use]
    pub fn max_iter(max_iter: i64) -> Self {
        Self {
            max_iter: Some(max_iter),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn julia_c(c: Complex) -> Self {
        Self {
            c_real: Some(c.real),
            c_imag: Some(c.imag),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: i64) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    #[must_use]
    pub fn with_c_real(mut self, c_real: f64) -> Self {
        self.c_real = Some(c_real);
        self
    }

    #[must_use]
    pub fn with_c_imag(mut self, c_imag: f64) -> Self {
        self.c_imag = Some(c_imag);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_iter.is_none() && self.c_real.is_none() && self.c_imag.is_none()
    }

    /// The validated iteration budget, if this update carries one.
    pub fn validated_max_iter(&self) -> FractalResult<Option<u32>> {
        self.max_iter.map(validate_max_iterations).transpose()
    }

    /// Merges the constant parts of this update into `current`.
    pub fn validated_julia_c(&self, current: Complex) -> FractalResult<Complex> {
        let real = match self.c_real {
            Some(value) => validate_finite("c_real", value)?,
            None => current.real,
        };
        let imag = match self.c_imag {
            Some(value) => validate_finite("c_imag", value)?,
            None => current.imag,
        };

        Ok(Complex { real, imag })
    }
}

pub fn validate_max_iterations(value: i64) -> FractalResult<u32> {
    if value <= 0 {
        return Err(FractalError::invalid(
            "max_iter",
            format!("must be a positive integer, got {}", value),
        ));
    }

    u32::try_from(value).map_err(|_| {
        FractalError::invalid("max_iter", format!("{} exceeds {}", value, u32::MAX))
    })
}

pub fn validate_finite(parameter: &'static str, value: f64) -> FractalResult<f64> {
    if !value.is_finite() {
        return Err(FractalError::invalid(parameter, format!("must be finite, got {}", value)));
    }

    Ok(value)
}

pub fn validate_julia_c(c: Complex) -> FractalResult<Complex> {
    Ok(Complex {
        real: validate_finite("c_real", c.real)?,
        imag: validate_finite("c_imag", c.imag)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_max_iterations_are_rejected() {
        for value in [0, -1, -10, i64::MIN] {
            assert!(matches!(
                validate_max_iterations(value),
                Err(FractalError::InvalidParameter {
                    parameter: "max_iter",
                    ..
                })
            ));
        }
    }

    #[test]
    fn oversized_max_iterations_are_rejected() {
        assert!(validate_max_iterations(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(validate_max_iterations(i64::from(u32::MAX)), Ok(u32::MAX));
    }

    #[test]
    fn positive_max_iterations_pass_through() {
        assert_eq!(validate_max_iterations(1), Ok(1));
        assert_eq!(validate_max_iterations(500), Ok(500));
    }

    #[test]
    fn partial_julia_update_keeps_other_component() {
        let update = ParameterUpdate::default().with_c_real(-0.8);

        assert_eq!(
            update.validated_julia_c(DEFAULT_JULIA_C),
            Ok(Complex::new(-0.8, 0.6))
        );
    }

    #[test]
    fn non_finite_julia_component_is_rejected() {
        let update = ParameterUpdate::default().with_c_imag(f64::NAN);

        assert!(matches!(
            update.validated_julia_c(DEFAULT_JULIA_C),
            Err(FractalError::InvalidParameter {
                parameter: "c_imag",
                ..
            })
        ));
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(ParameterUpdate::default().is_empty());
        assert!(!ParameterUpdate::max_iter(10).is_empty());
        assert_eq!(ParameterUpdate::default().validated_max_iter(), Ok(None));
    }
}
