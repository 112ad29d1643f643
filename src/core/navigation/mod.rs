//! Pan, click-to-zoom and animated zoom transitions over a [`Viewport`].
//!
//! The navigator is a plain state machine. It never sleeps or spawns timers;
//! instead every call returns a [`NavigatorResponse`] telling the caller
//! whether to re-render and when to deliver the next [`AnimationTick`].
//!
//! [`Viewport`]: crate::core::data::viewport::Viewport

pub mod config;
pub mod navigator;
pub mod state;

pub use config::NavigatorConfig;
pub use navigator::{AnimationTick, Navigator, NavigatorResponse, ScheduledTick};
pub use state::{NavigatorState, PanAnchor, ZoomAnimation, ZoomDirection};
