//! Overlay rendering.
//!
//! - [`view`]: size negotiation and layout (pure)
//! - [`drawing`]: painting with egui

pub mod drawing;
pub mod view;

pub use drawing::paint;
pub use view::{intrinsic_size, layout, measure, DrawParams, MeasureSpec};
