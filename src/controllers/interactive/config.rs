use crate::core::data::complex::Complex;
use crate::core::errors::{FractalError, FractalResult};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::parameters::{validate_julia_c, validate_max_iterations};

pub const DEFAULT_SCREEN_WIDTH: u32 = 600;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 400;
pub const DEFAULT_SESSION_MAX_ITERATIONS: i64 = 128;

/// Everything the UI layer supplies to start or reconfigure a session.
///
/// `max_iter` is signed so that a bad value from a text field or slider
/// reaches validation instead of failing to parse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fractal_kind: FractalKind,
    pub max_iter: i64,
    /// Only used by Julia; `None` keeps the current (or default) constant.
    pub julia_c: Option<Complex>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            fractal_kind: FractalKind::default(),
            max_iter: DEFAULT_SESSION_MAX_ITERATIONS,
            julia_c: None,
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn with_fractal_kind(mut self, fractal_kind: FractalKind) -> Self {
        self.fractal_kind = fractal_kind;
        self
    }

    #[must_use]
    pub fn with_screen_size(mut self, screen_width: u32, screen_height: u32) -> Self {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: i64) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub fn with_julia_c(mut self, julia_c: Complex) -> Self {
        self.julia_c = Some(julia_c);
        self
    }

    /// Checks every field, returning the iteration budget in its unsigned form.
    pub fn validate(&self) -> FractalResult<u32> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(FractalError::invalid(
                "screen_size",
                format!(
                    "must be positive: {}x{}",
                    self.screen_width, self.screen_height
                ),
            ));
        }

        if let Some(julia_c) = self.julia_c {
            validate_julia_c(julia_c)?;
        }

        validate_max_iterations(self.max_iter)
    }
}
