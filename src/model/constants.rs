//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! preference defaults, gesture thresholds and validation limits.

use std::time::Duration;

// === Visual Defaults ===

/// Base overlay edge length in density-independent pixels, before scaling.
pub const BASE_SIZE_DP: f32 = 120.0;

/// Circle radius as a fraction of half the shorter view edge.
pub const CIRCLE_RADIUS_FACTOR: f32 = 0.9;

/// Circle fill color (R, G, B) - red.
pub const CIRCLE_COLOR: (u8, u8, u8) = (255, 0, 0);

/// Speed text color (R, G, B) - white.
pub const TEXT_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Speed text size in scaled points.
pub const TEXT_SIZE_SP: f32 = 24.0;

/// Drop-shadow spread around the speed text, in points.
pub const TEXT_SHADOW_RADIUS: f32 = 4.0;

/// Speed shown by the preview in the settings window.
pub const PREVIEW_SPEED: f32 = 80.0;

// === Preference Defaults ===

/// Default overlay alpha: fully opaque.
pub const DEFAULT_ALPHA: i32 = 255;

/// Default scale factor.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "nl";

// === Validation Limits ===

/// Minimum alpha value.
pub const MIN_ALPHA: i32 = 0;

/// Maximum alpha value.
pub const MAX_ALPHA: i32 = 255;

/// Minimum scale factor.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum scale factor offered by the size slider.
pub const MAX_SCALE: f32 = 3.0;

// === Gestures ===

/// Hold duration after which a press becomes a long-press.
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(2000);

/// Movement in pixels on either axis that turns a press into a drag.
pub const DRAG_THRESHOLD_PX: i32 = 10;

// === Location ===

/// Minimum time between delivered location samples.
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

/// Minimum displacement in meters between delivered location samples.
pub const MIN_UPDATE_DISTANCE_M: f64 = 1.0;

/// Meters per second in one knot.
pub const MPS_PER_KNOT: f32 = 0.514_444;

// === Languages ===

/// Supported settings languages as (code, native name).
pub const LANGUAGES: [(&str, &str); 7] = [
    ("nl", "Nederlands"),
    ("en", "English"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("it", "Italiano"),
    ("es", "Español"),
    ("pt", "Português"),
];
