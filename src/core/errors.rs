use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    /// Rejected at the configuration boundary, never mid-render.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("viewport half-extents must be positive: {half_width}x{half_height}")]
    DegenerateViewport { half_width: f64, half_height: f64 },
}

impl FractalError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type FractalResult<T> = Result<T, FractalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_the_parameter() {
        let err = FractalError::invalid("max_iter", "must be a positive integer, got 0");

        assert_eq!(
            err.to_string(),
            "invalid parameter `max_iter`: must be a positive integer, got 0"
        );
    }

    #[test]
    fn degenerate_viewport_display_includes_extents() {
        let err = FractalError::DegenerateViewport {
            half_width: 0.0,
            half_height: 1.0,
        };

        assert_eq!(
            err.to_string(),
            "viewport half-extents must be positive: 0x1"
        );
    }
}
