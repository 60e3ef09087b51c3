//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use entity_store::api::ResourceClient;
use entity_store::config::{ApiConfig, Config, ListConfig};
use entity_store::model::Entity;
use entity_store::store::{EntityContainer, EntityStores, UnsortedOrder};
use std::path::PathBuf;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Config pointing at a mock collaborator with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
        },
        list: ListConfig::default(),
    }
}

/// Container for `E` talking to `mock`.
pub fn container<E: Entity>(mock: &MockBackend) -> EntityContainer<E> {
    container_with_order(mock, UnsortedOrder::default())
}

pub fn container_with_order<E: Entity>(
    mock: &MockBackend,
    unsorted: UnsortedOrder,
) -> EntityContainer<E> {
    let config = test_config(&mock.base_url());
    let client = ResourceClient::new(&config.api).expect("Failed to build client");
    EntityContainer::new(client, unsorted)
}

pub fn stores(mock: &MockBackend) -> EntityStores {
    EntityStores::from_config(&test_config(&mock.base_url())).expect("Failed to build stores")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
