//! Pointer input handling for the overlay.
//!
//! - [`gesture`]: drag / tap / long-press state machine
//! - [`timer`]: cancellable deferred timer polled from the UI loop

pub mod gesture;
pub mod timer;

pub use gesture::{Gesture, GestureTracker, PointerEvent};
pub use timer::DeferredTimer;
