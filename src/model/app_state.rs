//! Overlay state (pure Rust, no UI).
//!
//! This module defines the runtime state owned by the overlay controller.
//! The persisted subset lives in [`Preferences`](super::Preferences).

use super::constants::*;
use super::units::SpeedUnit;
use crate::{clamp_alpha, clamp_scale};

/// Overlay window offset in pixels. Unbounded; may be off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Complete overlay state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// Window offset.
    pub position: Position,
    /// Overall opacity [0, 255].
    pub alpha: i32,
    /// Size multiplier, never below [`MIN_SCALE`].
    pub scale: f32,
    /// Last displayed speed, already in `unit`. Never persisted.
    pub speed: f32,
    /// Display unit.
    pub unit: SpeedUnit,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            position: Position::default(),
            alpha: DEFAULT_ALPHA,
            scale: DEFAULT_SCALE,
            speed: 0.0,
            unit: SpeedUnit::default(),
        }
    }
}

impl OverlayState {
    /// Sets alpha clamped to [0, 255].
    pub fn set_alpha(&mut self, alpha: i32) {
        self.alpha = clamp_alpha(alpha);
    }

    /// Sets the scale factor, raised to at least [`MIN_SCALE`].
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
    }

    /// Sets the displayed speed, already converted to `unit`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Speed as shown on the overlay: truncated toward zero.
    pub fn speed_text(&self) -> String {
        (self.speed as i32).to_string()
    }

    /// Opacity in [0.0, 1.0] derived from alpha.
    pub fn opacity(&self) -> f32 {
        clamp_alpha(self.alpha) as f32 / MAX_ALPHA as f32
    }
}
