//! Session facade for an interactive UI layer.
//!
//! The UI feeds pointer events, timer ticks and configuration changes into a
//! [`FractalExplorer`] and gets render buffers and status data back. No window,
//! widget or timer code lives here.

mod config;
mod controller;

pub use config::{
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SESSION_MAX_ITERATIONS, ExplorerConfig,
};
pub use controller::FractalExplorer;
