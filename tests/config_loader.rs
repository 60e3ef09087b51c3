mod common;

use entity_store::config::{Config, ConfigError};
use entity_store::store::{EntityStores, UnsortedOrder};
use std::path::Path;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.list.unsorted_order, UnsortedOrder::Reversed);
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("entity-store/config.toml"));
}

/// A missing file falls back to defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/entity-store/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// A full file is parsed and validated.
#[test]
fn test_load_full_file() {
    let (_dir, path) = common::temp_config(
        r#"
[api]
base_url = "https://clinic.example.com"
timeout_seconds = 10
connect_timeout_seconds = 2

[list]
unsorted_order = "arrival"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://clinic.example.com");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert_eq!(config.list.unsorted_order, UnsortedOrder::Arrival);
    assert_eq!(
        config.api.resource_url("appointments"),
        "https://clinic.example.com/api/appointments"
    );
}

/// Invalid TOML is reported with the file path.
#[test]
fn test_parse_error_mentions_path() {
    let (_dir, path) = common::temp_config("[api\nbase_url = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// An unknown ordering value is a parse error.
#[test]
fn test_unknown_unsorted_order_rejected() {
    let (_dir, path) = common::temp_config("[list]\nunsorted_order = \"random\"\n");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

/// Validation runs after parsing.
#[test]
fn test_validation_runs_on_load() {
    let (_dir, path) = common::temp_config("[api]\nbase_url = \"localhost:8080\"\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Stores can be built from any valid config.
#[test]
fn test_stores_from_loaded_config() {
    let (_dir, path) = common::temp_config("[api]\nbase_url = \"http://127.0.0.1:9\"\n");
    let config = Config::load_from(&path).unwrap();

    let stores = EntityStores::from_config(&config).unwrap();
    assert!(stores.items.snapshot().entities.is_empty());
}
