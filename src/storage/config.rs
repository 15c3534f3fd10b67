//! JSON preference file.
//!
//! Stores preferences in `<config_dir>/speed_overlay/prefs.json`.
//!
//! Uses an in-memory cache to avoid disk I/O on every slider change.
//! Call `flush()` to persist changes to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::PreferenceStore;
use crate::model::{Position, Preferences};

const APP_DIR: &str = "speed_overlay";
const FILE_NAME: &str = "prefs.json";

/// Serializable config structure for JSON persistence.
///
/// Field names are the preference keys. Missing keys take their default;
/// the unit is kept as a string so a bad value only resets the unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
struct Config {
    overlay_x: i32,
    overlay_y: i32,
    overlay_alpha: i32,
    overlay_scale: f32,
    overlay_unit: String,
    overlay_language: String,
    overlay_running: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(&Preferences::default())
    }
}

impl From<&Preferences> for Config {
    fn from(prefs: &Preferences) -> Self {
        let position = prefs.position();
        Self {
            overlay_x: position.x,
            overlay_y: position.y,
            overlay_alpha: prefs.alpha(),
            overlay_scale: prefs.scale(),
            overlay_unit: prefs.unit().name().to_string(),
            overlay_language: prefs.language().to_string(),
            overlay_running: prefs.is_running(),
        }
    }
}

impl Config {
    fn into_preferences(self) -> Preferences {
        let mut prefs = Preferences::default();
        prefs.set_position(Position::new(self.overlay_x, self.overlay_y));
        prefs.set_alpha(self.overlay_alpha);
        prefs.set_scale(self.overlay_scale);
        prefs.set_unit_name(&self.overlay_unit);
        prefs.set_language(self.overlay_language);
        prefs.set_running(self.overlay_running);
        prefs
    }
}

/// Default preference file path under the user config directory.
pub fn default_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(FILE_NAME)
}

/// Preference store backed by a JSON file with a write-back cache.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cache: Option<Config>,
    dirty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
            dirty: false,
        }
    }

    /// Store at [`default_path`].
    pub fn open_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Missing file gives defaults; a corrupt one gives defaults and a warning.
    fn load_from_disk(&self) -> Config {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), "no preference file ({e}), using defaults");
                return Config::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "invalid preference file ({e}), using defaults");
            Config::default()
        })
    }

    fn save_to_disk(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create preference folder {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config).context("serialize preferences")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write preference file {}", self.path.display()))
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&mut self) -> Preferences {
        let config = match &self.cache {
            Some(config) => config.clone(),
            None => {
                let config = self.load_from_disk();
                self.cache = Some(config.clone());
                config
            }
        };
        config.into_preferences()
    }

    fn save(&mut self, prefs: &Preferences) {
        let config = Config::from(prefs);
        if self.cache.as_ref() != Some(&config) {
            self.cache = Some(config);
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(config) = &self.cache {
            self.save_to_disk(config)?;
            debug!(path = %self.path.display(), "preferences flushed");
        }
        self.dirty = false;
        Ok(())
    }
}
