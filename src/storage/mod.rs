//! Preference storage.
//!
//! [`PreferenceStore`] is the narrow load/save seam; [`JsonFileStore`] persists
//! to disk and [`MemoryStore`] keeps everything in memory.

mod config;

pub use config::{default_path, JsonFileStore};

use anyhow::Result;

use crate::model::Preferences;

/// Load/save access to the persisted preferences.
pub trait PreferenceStore {
    /// Current preferences; defaults for anything missing or unreadable.
    fn load(&mut self) -> Preferences;

    /// Records `prefs`. May be buffered until [`flush`](Self::flush).
    fn save(&mut self, prefs: &Preferences);

    /// Writes buffered changes to the backing storage.
    fn flush(&mut self) -> Result<()>;
}

/// Store without persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    prefs: Preferences,
    saves: usize,
}

impl MemoryStore {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs, saves: 0 }
    }

    /// Last saved preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Number of `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&mut self) -> Preferences {
        self.prefs.clone()
    }

    fn save(&mut self, prefs: &Preferences) {
        self.prefs = prefs.clone();
        self.saves += 1;
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
