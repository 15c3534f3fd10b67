//! User preferences persisted between runs.
//!
//! `Preferences` is the explicit settings struct handed to the controller and
//! the settings window. Storage lives behind [`crate::storage::PreferenceStore`].

use super::app_state::Position;
use super::constants::*;
use super::units::SpeedUnit;
use crate::{clamp_alpha, clamp_scale};

/// The seven persisted keys with their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    x: i32,
    y: i32,
    alpha: i32,
    scale: f32,
    unit: SpeedUnit,
    language: String,
    running: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            alpha: DEFAULT_ALPHA,
            scale: DEFAULT_SCALE,
            unit: SpeedUnit::Kmh,
            language: DEFAULT_LANGUAGE.to_string(),
            running: false,
        }
    }
}

impl Preferences {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Position) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    /// Stores alpha clamped to [0, 255].
    pub fn set_alpha(&mut self, alpha: i32) {
        self.alpha = clamp_alpha(alpha);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Stores scale, raised to at least [`MIN_SCALE`].
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: SpeedUnit) {
        self.unit = unit;
    }

    /// Parses a stored unit name, falling back to km/h.
    pub fn set_unit_name(&mut self, name: &str) {
        self.unit = name.parse().unwrap_or_else(|e| {
            tracing::warn!("{e}, falling back to {}", SpeedUnit::Kmh);
            SpeedUnit::Kmh
        });
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
    }

    /// Index of the language in [`LANGUAGES`], or 0 when unknown.
    pub fn language_index(&self) -> usize {
        LANGUAGES
            .iter()
            .position(|(code, _)| *code == self.language)
            .unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_name_falls_back_to_kmh() {
        let mut prefs = Preferences::default();
        prefs.set_unit(SpeedUnit::Mph);
        prefs.set_unit_name("KNOTS");
        assert_eq!(prefs.unit(), SpeedUnit::Kmh);
    }

    #[test]
    fn known_unit_name_is_applied() {
        let mut prefs = Preferences::default();
        prefs.set_unit_name("MPH");
        assert_eq!(prefs.unit(), SpeedUnit::Mph);
    }

    #[test]
    fn language_index_of_unknown_code_is_first() {
        let mut prefs = Preferences::default();
        prefs.set_language("xx");
        assert_eq!(prefs.language_index(), 0);
        prefs.set_language("de");
        assert_eq!(prefs.language_index(), 3);
    }
}
