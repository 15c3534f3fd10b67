//! Settings window.

mod window;

pub use window::{percent_to_scale, scale_to_percent, show, SettingsAction};
