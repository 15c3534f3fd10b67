//! JSON preference file round trips on a temporary directory.

use std::fs;

use speed_overlay::storage::{JsonFileStore, PreferenceStore};
use speed_overlay::{Position, Preferences, SpeedUnit};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("prefs.json"));

    assert_eq!(store.load(), Preferences::default());
    assert!(!store.is_dirty());
}

#[test]
fn preferences_survive_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut prefs = Preferences::default();
    prefs.set_position(Position::new(-20, 640));
    prefs.set_alpha(128);
    prefs.set_scale(1.5);
    prefs.set_unit(SpeedUnit::Mph);
    prefs.set_language("fr");
    prefs.set_running(true);

    let mut store = JsonFileStore::new(&path);
    store.save(&prefs);
    assert!(store.is_dirty());
    assert!(!path.exists());
    store.flush().unwrap();
    assert!(!store.is_dirty());

    let mut reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load(), prefs);
}

#[test]
fn file_uses_overlay_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut store = JsonFileStore::new(&path);

    let mut prefs = Preferences::default();
    prefs.set_unit(SpeedUnit::Mph);
    store.save(&prefs);
    store.flush().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["overlay_unit"], "MPH");
    assert_eq!(json["overlay_alpha"], 255);
    assert_eq!(json["overlay_running"], false);
}

#[test]
fn corrupt_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileStore::new(&path);
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn unknown_unit_name_falls_back_to_kmh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"overlay_unit": "KNOTS", "overlay_alpha": 90}"#).unwrap();

    let prefs = JsonFileStore::new(&path).load();
    assert_eq!(prefs.unit(), SpeedUnit::Kmh);
    assert_eq!(prefs.alpha(), 90);
}

#[test]
fn flush_without_changes_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut store = JsonFileStore::new(&path);

    store.flush().unwrap();
    assert!(!path.exists());
}
