use std::time::Duration;

use log::{debug, trace};

use crate::core::data::complex::Complex;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::{ViewBounds, Viewport};
use crate::core::errors::FractalResult;
use crate::core::navigation::config::NavigatorConfig;
use crate::core::navigation::state::{NavigatorState, PanAnchor, ZoomAnimation, ZoomDirection};

/// Handle for one scheduled animation frame. Only ticks from the running
/// animation's generation have any effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnimationTick {
    pub generation: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScheduledTick {
    pub tick: AnimationTick,
    pub delay: Duration,
}

/// What the caller should do after feeding an event to the navigator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct NavigatorResponse {
    pub render_requested: bool,
    pub next_tick: Option<ScheduledTick>,
}

impl NavigatorResponse {
    fn nothing() -> Self {
        Self::default()
    }

    fn render() -> Self {
        Self {
            render_requested: true,
            next_tick: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigatorConfig,
    state: NavigatorState,
    generation: u64,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> FractalResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            state: NavigatorState::Idle,
            generation: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, NavigatorState::AnimatingZoom(_))
    }

    /// Animated zoom towards the clicked point, which becomes the new center.
    pub fn on_click(
        &mut self,
        viewport: &Viewport,
        pixel: PixelPoint,
        direction: ZoomDirection,
    ) -> NavigatorResponse {
        let target_center = viewport.to_complex(pixel);
        self.start_zoom(viewport.bounds(), target_center, direction)
    }

    /// Animated zoom that keeps the current center.
    pub fn zoom_at_center(
        &mut self,
        viewport: &Viewport,
        direction: ZoomDirection,
    ) -> NavigatorResponse {
        let bounds = viewport.bounds();
        self.start_zoom(bounds, bounds.center(), direction)
    }

    pub fn on_drag_start(&mut self, viewport: &Viewport, pixel: PixelPoint) -> NavigatorResponse {
        self.interrupt();

        self.transition(NavigatorState::Panning(PanAnchor {
            pixel,
            bounds: viewport.bounds(),
        }));
        NavigatorResponse::nothing()
    }

    /// Re-centers relative to the anchor captured at drag start; extents stay
    /// at the anchor's values.
    pub fn on_drag_move(&mut self, viewport: &mut Viewport, pixel: PixelPoint) -> NavigatorResponse {
        let NavigatorState::Panning(anchor) = self.state else {
            trace!("drag move ignored while {}", self.state.name());
            return NavigatorResponse::nothing();
        };

        let (dx, dy) = pixel.offset_from(anchor.pixel);
        let bounds = anchor.bounds;
        let delta_real = -dx * (2.0 * bounds.half_width()) / f64::from(viewport.screen_width());
        let delta_imag = dy * (2.0 * bounds.half_height()) / f64::from(viewport.screen_height());

        let center = bounds.center() + Complex::new(delta_real, delta_imag);
        viewport.set_bounds(bounds.recentered(center));

        NavigatorResponse::render()
    }

    pub fn on_drag_end(&mut self) -> NavigatorResponse {
        if matches!(self.state, NavigatorState::Panning(_)) {
            self.transition(NavigatorState::Idle);
        }
        NavigatorResponse::nothing()
    }

    /// Advances the running animation by one frame. Stale ticks are dropped
    /// without touching the viewport.
    pub fn on_animation_tick(
        &mut self,
        viewport: &mut Viewport,
        tick: AnimationTick,
    ) -> NavigatorResponse {
        let NavigatorState::AnimatingZoom(mut animation) = self.state else {
            trace!("tick {} ignored while {}", tick.generation, self.state.name());
            return NavigatorResponse::nothing();
        };

        if animation.generation != tick.generation {
            trace!(
                "stale tick {} ignored, current generation {}",
                tick.generation, animation.generation
            );
            return NavigatorResponse::nothing();
        }

        animation.frame += 1;
        viewport.set_bounds(animation.bounds_at(animation.frame));

        if animation.is_finished() {
            self.transition(NavigatorState::Idle);
            return NavigatorResponse::render();
        }

        self.state = NavigatorState::AnimatingZoom(animation);
        NavigatorResponse {
            render_requested: true,
            next_tick: Some(self.schedule(animation.generation)),
        }
    }

    /// Drops any pan or animation in progress; the viewport keeps whatever
    /// state it reached.
    pub fn cancel(&mut self) {
        self.interrupt();
        self.transition(NavigatorState::Idle);
    }

    fn start_zoom(
        &mut self,
        start: ViewBounds,
        target_center: Complex,
        direction: ZoomDirection,
    ) -> NavigatorResponse {
        self.interrupt();

        let factor = self.config.zoom_factor(direction);
        let target = start.zoomed(target_center, factor, self.config.min_half_extent);

        self.generation += 1;
        self.transition(NavigatorState::AnimatingZoom(ZoomAnimation {
            start,
            target,
            frame: 0,
            total_frames: self.config.animation_frames,
            generation: self.generation,
        }));

        NavigatorResponse {
            render_requested: false,
            next_tick: Some(self.schedule(self.generation)),
        }
    }

    /// Invalidates outstanding ticks if an animation is running.
    fn interrupt(&mut self) {
        if let NavigatorState::AnimatingZoom(animation) = self.state {
            self.generation += 1;
            debug!(
                "zoom animation {} cancelled at frame {}/{}",
                animation.generation, animation.frame, animation.total_frames
            );
        }
    }

    fn schedule(&self, generation: u64) -> ScheduledTick {
        ScheduledTick {
            tick: AnimationTick { generation },
            delay: self.config.tick_interval,
        }
    }

    fn transition(&mut self, next: NavigatorState) {
        if self.state.name() != next.name() {
            debug!("navigator {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            config: NavigatorConfig::default(),
            state: NavigatorState::Idle,
            generation: 0,
        }
    }
}
