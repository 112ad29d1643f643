use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::ViewBounds;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Captured at drag start; every move is measured against it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanAnchor {
    pub pixel: PixelPoint,
    pub bounds: ViewBounds,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomAnimation {
    pub start: ViewBounds,
    pub target: ViewBounds,
    pub frame: u32,
    pub total_frames: u32,
    pub generation: u64,
}

impl ZoomAnimation {
    /// Bounds shown at `frame`: exactly `start` at 0, exactly `target` at
    /// `total_frames`.
    #[must_use]
    pub fn bounds_at(&self, frame: u32) -> ViewBounds {
        let t = f64::from(frame) / f64::from(self.total_frames);
        self.start.interpolate(&self.target, t)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frame >= self.total_frames
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum NavigatorState {
    #[default]
    Idle,
    Panning(PanAnchor),
    AnimatingZoom(ZoomAnimation),
}

impl NavigatorState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning(_) => "panning",
            Self::AnimatingZoom(_) => "animating_zoom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn animation(total_frames: u32) -> ZoomAnimation {
        ZoomAnimation {
            start: ViewBounds::new(Complex::new(-0.5, 0.0), 1.75, 1.0).unwrap(),
            target: ViewBounds::new(Complex::new(0.3, 0.2), 0.7, 0.4).unwrap(),
            frame: 0,
            total_frames,
            generation: 1,
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let animation = animation(15);

        assert_eq!(animation.bounds_at(0), animation.start);
        assert_eq!(animation.bounds_at(15), animation.target);
    }

    #[test]
    fn midpoint_is_halfway() {
        let animation = animation(2);
        let mid = animation.bounds_at(1);

        assert!((mid.center().real - -0.1).abs() < 1e-12);
        assert!((mid.center().imag - 0.1).abs() < 1e-12);
        assert!((mid.half_width() - 1.225).abs() < 1e-12);
        assert!((mid.half_height() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn finished_only_at_last_frame() {
        let mut animation = animation(3);

        assert!(!animation.is_finished());
        animation.frame = 2;
        assert!(!animation.is_finished());
        animation.frame = 3;
        assert!(animation.is_finished());
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(NavigatorState::default(), NavigatorState::Idle);
        assert_eq!(NavigatorState::default().name(), "idle");
    }
}
