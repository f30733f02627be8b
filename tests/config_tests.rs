use atlas_history::{AtlasConfig, HISTORY_SLOT, MAX_COORDINATE};
use tempfile::TempDir;

/// Configuration load/save/validate tests

#[test]
fn test_default_config_is_valid() {
    let config = AtlasConfig::default();
    assert_eq!(config.storage.slot, HISTORY_SLOT);
    assert_eq!(config.coordinates.max_coordinate, MAX_COORDINATE);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_or_create_writes_defaults_then_reads_edits() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config").join("atlas.toml");
    let path = path.to_str().expect("utf-8 path");

    let created = AtlasConfig::load_or_create(path).expect("create default config");
    assert!(std::path::Path::new(path).exists(), "Default config should be written");
    assert_eq!(created.storage.slot, HISTORY_SLOT);

    let mut edited = created.clone();
    edited.storage.path = "elsewhere/history.json".to_string();
    edited.coordinates.max_coordinate = 5000;
    edited.save(path).expect("save edited config");

    let loaded = AtlasConfig::load_or_create(path).expect("load edited config");
    assert_eq!(loaded.storage.path, "elsewhere/history.json");
    assert_eq!(loaded.coordinates.max_coordinate, 5000);
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = AtlasConfig::default();
    config.storage.slot.clear();
    assert!(config.validate().is_err());

    let mut config = AtlasConfig::default();
    config.coordinates.max_coordinate = 0;
    assert!(config.validate().is_err());

    let mut config = AtlasConfig::default();
    config.output.verbosity = 9;
    assert!(config.validate().is_err());

    let mut config = AtlasConfig::default();
    config.storage.path = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("atlas.toml");
    std::fs::write(&path, "[storage\npath = ").expect("seed config");

    assert!(AtlasConfig::load_or_create(path.to_str().expect("utf-8 path")).is_err());
}
