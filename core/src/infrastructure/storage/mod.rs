pub mod json_file;
pub mod mappers;
pub mod memory;

pub use json_file::JsonFileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Store selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum KeyValueStoreBackend {
    Memory(InMemoryKeyValueStore),
    JsonFile(JsonFileKeyValueStore),
}

impl KeyValueStore for KeyValueStoreBackend {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        match self {
            KeyValueStoreBackend::Memory(store) => store.get(key).await,
            KeyValueStoreBackend::JsonFile(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        match self {
            KeyValueStoreBackend::Memory(store) => store.set(key, value).await,
            KeyValueStoreBackend::JsonFile(store) => store.set(key, value).await,
        }
    }
}
