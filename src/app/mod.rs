//! Overlay lifecycle and the desktop shell around it.
//!
//! - [`controller`]: owns overlay state, gestures and location subscription
//! - [`host`]: window host seam and its egui implementation
//! - [`shell`]: the eframe application (settings window + overlay viewport)

pub mod controller;
pub mod host;
pub mod shell;

pub use controller::OverlayController;
pub use host::{LayoutParams, ViewportHost, WindowHost};
pub use shell::SpeedOverlayApp;
