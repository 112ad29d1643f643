use log::info;

use crate::controllers::interactive::config::ExplorerConfig;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::render_buffer::RenderBuffer;
use crate::core::data::viewport::{ViewBounds, Viewport};
use crate::core::engine::FractalEngine;
use crate::core::errors::FractalResult;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::parameters::{DEFAULT_JULIA_C, FractalParameters, ParameterUpdate};
use crate::core::navigation::{
    AnimationTick, Navigator, NavigatorConfig, NavigatorResponse, ZoomDirection,
};

/// Width of the plane, in units, that counts as zoom level 1.
const UNIT_ZOOM_WIDTH: f64 = 3.5;

/// One interactive exploration session: engine, viewport and navigator.
///
/// All methods run on the caller's thread. Rendering fans out over rayon
/// internally but returns only once the buffer is complete.
#[derive(Debug, Clone)]
pub struct FractalExplorer {
    engine: FractalEngine,
    viewport: Viewport,
    navigator: Navigator,
}

impl FractalExplorer {
    pub fn new(config: ExplorerConfig) -> FractalResult<Self> {
        Self::with_navigator_config(config, NavigatorConfig::default())
    }

    pub fn with_navigator_config(
        config: ExplorerConfig,
        navigator_config: NavigatorConfig,
    ) -> FractalResult<Self> {
        let max_iterations = config.validate()?;
        let navigator = Navigator::new(navigator_config)?;
        let engine = FractalEngine::new(
            config.fractal_kind,
            max_iterations,
            config.julia_c.unwrap_or(DEFAULT_JULIA_C),
        )?;
        let viewport = Viewport::new(
            config.fractal_kind.default_view(),
            config.screen_width,
            config.screen_height,
        )?;

        Ok(Self {
            engine,
            viewport,
            navigator,
        })
    }

    /// Applies a full configuration. The view resets to the family default
    /// only when the family changes; otherwise the current bounds are kept
    /// on the new screen size. Nothing changes if validation fails.
    pub fn configure(&mut self, config: ExplorerConfig) -> FractalResult<()> {
        config.validate()?;

        let mut engine = self.engine.clone();
        engine.select(config.fractal_kind)?;
        let update = ParameterUpdate {
            max_iter: Some(config.max_iter),
            c_real: config.julia_c.map(|c| c.real),
            c_imag: config.julia_c.map(|c| c.imag),
        };
        engine.set_parameters(&update)?;

        let bounds = if config.fractal_kind == self.engine.kind() {
            self.viewport.bounds()
        } else {
            config.fractal_kind.default_view()
        };
        let viewport = Viewport::new(bounds, config.screen_width, config.screen_height)?;

        self.navigator.cancel();
        self.engine = engine;
        self.viewport = viewport;

        info!(
            "session configured: {} at {}x{}",
            self.engine.kind(),
            config.screen_width,
            config.screen_height
        );
        Ok(())
    }

    /// Row-major buffer of the current view, row 0 at the top of the screen.
    pub fn render(&self) -> FractalResult<RenderBuffer> {
        self.engine.render(&self.viewport)
    }

    pub fn on_click(&mut self, pixel: PixelPoint, direction: ZoomDirection) -> NavigatorResponse {
        self.navigator.on_click(&self.viewport, pixel, direction)
    }

    pub fn zoom_at_center(&mut self, direction: ZoomDirection) -> NavigatorResponse {
        self.navigator.zoom_at_center(&self.viewport, direction)
    }

    pub fn on_drag_start(&mut self, pixel: PixelPoint) -> NavigatorResponse {
        self.navigator.on_drag_start(&self.viewport, pixel)
    }

    pub fn on_drag_move(&mut self, pixel: PixelPoint) -> NavigatorResponse {
        self.navigator.on_drag_move(&mut self.viewport, pixel)
    }

    pub fn on_drag_end(&mut self) -> NavigatorResponse {
        self.navigator.on_drag_end()
    }

    pub fn on_animation_tick(&mut self, tick: AnimationTick) -> NavigatorResponse {
        self.navigator.on_animation_tick(&mut self.viewport, tick)
    }

    /// Back to the current family's default view.
    pub fn reset_view(&mut self) -> NavigatorResponse {
        self.navigator.cancel();
        self.viewport.set_bounds(self.engine.kind().default_view());

        NavigatorResponse {
            render_requested: true,
            next_tick: None,
        }
    }

    pub fn resize(&mut self, screen_width: u32, screen_height: u32) -> FractalResult<()> {
        self.viewport.resize(screen_width, screen_height)
    }

    /// `(center_re, center_im, half_width, half_height)`
    #[must_use]
    pub fn current_viewport(&self) -> (f64, f64, f64, f64) {
        self.viewport.bounds().as_tuple()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.viewport.bounds()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        UNIT_ZOOM_WIDTH / (2.0 * self.viewport.bounds().half_width())
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        self.engine.kind()
    }

    #[must_use]
    pub fn parameters(&self) -> FractalParameters {
        self.engine.parameters()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn set_max_iterations(&mut self, max_iter: i64) -> FractalResult<()> {
        self.engine.set_parameters(&ParameterUpdate::max_iter(max_iter))
    }

    /// Switches family and jumps to its default view.
    pub fn select_fractal(&mut self, kind: FractalKind) -> FractalResult<NavigatorResponse> {
        self.engine.select(kind)?;
        Ok(self.reset_view())
    }

    pub fn set_julia_constant(&mut self, c: Complex) -> FractalResult<()> {
        self.engine.set_parameters(&ParameterUpdate::julia_c(c))
    }

    pub fn set_julia_c_real(&mut self, c_real: f64) -> FractalResult<()> {
        self.engine
            .set_parameters(&ParameterUpdate::default().with_c_real(c_real))
    }

    pub fn set_julia_c_imag(&mut self, c_imag: f64) -> FractalResult<()> {
        self.engine
            .set_parameters(&ParameterUpdate::default().with_c_imag(c_imag))
    }
}
