use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;

/// Radius-2 escape criterion, compared against `|z|²`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `step` from `z0` until `|z|²` exceeds the escape radius or the budget
/// runs out. The test happens before each step, so `z0` itself may escape at
/// iteration 0.
#[inline]
pub(crate) fn escape_time<F>(z0: Complex, max_iterations: u32, step: F) -> EscapeResult
where
    F: Fn(Complex) -> Complex,
{
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(EscapeResult {
                iterations: iteration,
                final_z: z,
            })
        } else {
            ControlFlow::Continue(step(z))
        }
    });

    match outcome {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(final_z) => EscapeResult {
            iterations: max_iterations,
            final_z,
        },
    }
}

#[inline]
pub(crate) fn orbit<F>(z0: Complex, steps: u32, step: F) -> Complex
where
    F: Fn(Complex) -> Complex,
{
    (0..steps).fold(z0, |z, _| step(z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(z: Complex) -> Complex {
        z * z
    }

    #[test]
    fn escaping_start_value_reports_zero_iterations() {
        let result = escape_time(Complex::new(3.0, 0.0), 10, square);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_z, Complex::new(3.0, 0.0));
    }

    #[test]
    fn radius_two_is_not_yet_escaped() {
        // |2|² == 4 stays inside, one squaring later it is out
        let result = escape_time(Complex::new(2.0, 0.0), 10, square);

        assert_eq!(result.iterations, 1);
        assert_eq!(result.final_z, Complex::new(4.0, 0.0));
    }

    #[test]
    fn bounded_orbit_uses_full_budget() {
        let result = escape_time(Complex::new(0.5, 0.0), 7, square);

        assert_eq!(result.iterations, 7);
        assert!(result.final_z.magnitude() < 0.5);
    }

    #[test]
    fn orbit_ignores_escape_radius() {
        assert_eq!(orbit(Complex::new(2.0, 0.0), 3, square), Complex::new(256.0, 0.0));
        assert_eq!(orbit(Complex::new(2.0, 0.0), 0, square), Complex::new(2.0, 0.0));
    }
}
