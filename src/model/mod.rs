//! Application domain model.
//!
//! This module contains pure logic (no UI dependencies) including overlay
//! state, persisted preferences, speed units and configuration constants.
//!
//! Persistence is in [`crate::storage`].

pub mod app_state;
pub mod constants;
pub mod preferences;
pub mod units;

pub use app_state::{OverlayState, Position};
pub use constants::*;
pub use preferences::Preferences;
pub use units::{convert_speed, SpeedUnit};
