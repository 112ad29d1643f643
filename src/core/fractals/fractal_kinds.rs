use std::fmt;
use std::str::FromStr;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::ViewBounds;
use crate::core::errors::FractalError;

const DEFAULT_HALF_WIDTH: f64 = 1.75;
const DEFAULT_HALF_HEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }

    /// Stable identifier used in configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning_ship",
        }
    }

    /// The view a session starts from, or returns to on reset.
    #[must_use]
    pub const fn default_view(self) -> ViewBounds {
        let center = match self {
            Self::Mandelbrot => Complex::new(-0.5, 0.0),
            Self::Julia => Complex::new(0.0, 0.0),
            Self::BurningShip => Complex::new(-1.75, -0.03),
        };

        ViewBounds::preset(center, DEFAULT_HALF_WIDTH, DEFAULT_HALF_HEIGHT)
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| {
                FractalError::invalid("fractal_kind", format!("unsupported fractal kind `{}`", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_display_names() {
        assert_eq!("mandelbrot".parse::<FractalKind>(), Ok(FractalKind::Mandelbrot));
        assert_eq!("Julia".parse::<FractalKind>(), Ok(FractalKind::Julia));
        assert_eq!("burning_ship".parse::<FractalKind>(), Ok(FractalKind::BurningShip));
        assert_eq!("Burning Ship".parse::<FractalKind>(), Ok(FractalKind::BurningShip));
        assert_eq!(" burning-ship ".parse::<FractalKind>(), Ok(FractalKind::BurningShip));
    }

    #[test]
    fn unsupported_kind_is_invalid_parameter() {
        assert!(matches!(
            "tricorn".parse::<FractalKind>(),
            Err(FractalError::InvalidParameter {
                parameter: "fractal_kind",
                ..
            })
        ));
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for kind in FractalKind::ALL {
            assert_eq!(kind.key().parse::<FractalKind>(), Ok(*kind));
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }

    #[test]
    fn default_views_are_valid_and_family_specific() {
        for kind in FractalKind::ALL {
            let view = kind.default_view();
            assert!(ViewBounds::new(view.center(), view.half_width(), view.half_height()).is_ok());
            assert_eq!(view.half_width(), 1.75);
            assert_eq!(view.half_height(), 1.0);
        }

        assert_eq!(FractalKind::Mandelbrot.default_view().center(), Complex::new(-0.5, 0.0));
        assert_eq!(FractalKind::Julia.default_view().center(), Complex::ZERO);
        assert_eq!(
            FractalKind::BurningShip.default_view().center(),
            Complex::new(-1.75, -0.03)
        );
    }
}
