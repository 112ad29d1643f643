use std::time::Duration;

use crate::core::errors::{FractalError, FractalResult};
use crate::core::navigation::state::ZoomDirection;

pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.9;
pub const DEFAULT_ANIMATION_FRAMES: u32 = 15;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);
pub const DEFAULT_MIN_HALF_EXTENT: f64 = 1e-15;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Half-extent multiplier for one zoom-in step; zoom-out uses the inverse.
    pub zoom_in_factor: f64,
    pub animation_frames: u32,
    pub tick_interval: Duration,
    /// Floor for both half-extents after any zoom.
    pub min_half_extent: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            animation_frames: DEFAULT_ANIMATION_FRAMES,
            tick_interval: DEFAULT_TICK_INTERVAL,
            min_half_extent: DEFAULT_MIN_HALF_EXTENT,
        }
    }
}

impl NavigatorConfig {
    pub fn validate(&self) -> FractalResult<()> {
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return Err(FractalError::invalid(
                "zoom_in_factor",
                format!("must lie strictly between 0 and 1, got {}", self.zoom_in_factor),
            ));
        }

        if self.animation_frames == 0 {
            return Err(FractalError::invalid(
                "animation_frames",
                "must be at least 1",
            ));
        }

        if self.tick_interval.is_zero() {
            return Err(FractalError::invalid("tick_interval", "must be non-zero"));
        }

        if !(self.min_half_extent > 0.0 && self.min_half_extent.is_finite()) {
            return Err(FractalError::invalid(
                "min_half_extent",
                format!("must be positive and finite, got {}", self.min_half_extent),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn zoom_factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => 1.0 / self.zoom_in_factor,
        }
    }
}
