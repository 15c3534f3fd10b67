//! User interface module.
//!
//! ## overlay/
//! - view.rs: size negotiation and layout of the speed bubble
//! - drawing.rs: circle and speed text painting
//!
//! ## settings/
//! - window.rs: settings controls and preview

pub mod overlay;
pub mod settings;
