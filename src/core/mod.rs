pub mod actions;
pub mod data;
pub mod engine;
pub mod errors;
pub mod fractals;
pub mod navigation;
