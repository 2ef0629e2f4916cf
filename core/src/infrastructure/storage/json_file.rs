use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde_json::{Map, Value};
use tokio::{fs, sync::RwLock};
use tracing::{error, info};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Store persisted as one JSON object on disk.
///
/// The file is read once in [`JsonFileKeyValueStore::open`]; every `set`
/// rewrites it through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    entries: Arc<RwLock<Map<String, Value>>>,
}

impl JsonFileKeyValueStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Map::new(),
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(entries)) => entries,
                Ok(_) => {
                    error!(path = %path.display(), "Store file is not a JSON object");
                    return Err(CoreError::StorageError(format!(
                        "{} does not contain a JSON object",
                        path.display()
                    )));
                }
                Err(e) => {
                    error!(path = %path.display(), "Failed to parse store file: {}", e);
                    return Err(CoreError::StorageError(format!(
                        "failed to parse {}: {}",
                        path.display(),
                        e
                    )));
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Map::new(),
            Err(e) => {
                error!(path = %path.display(), "Failed to read store file: {}", e);
                return Err(CoreError::StorageError(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        info!(path = %path.display(), keys = entries.len(), "key-value store loaded");

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    async fn flush(&self, entries: &Map<String, Value>) -> Result<(), CoreError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(|e| {
            error!("Failed to serialize store: {}", e);
            CoreError::StorageError(format!("failed to serialize store: {}", e))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!(path = %parent.display(), "Failed to create store directory: {}", e);
                CoreError::StorageError(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).await.map_err(|e| {
            error!(path = %temp_path.display(), "Failed to write store file: {}", e);
            CoreError::StorageError(format!("failed to write {}: {}", temp_path.display(), e))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            error!(path = %self.path.display(), "Failed to replace store file: {}", e);
            CoreError::StorageError(format!("failed to replace {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), CoreError> {
        let mut entries = self.entries.write().await;
        let previous = entries.insert(key.to_string(), value);

        if let Err(e) = self.flush(&entries).await {
            // keep memory in step with disk
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::open(dir.path().join("despensa.json"))
            .await
            .unwrap();

        assert_eq!(store.get("pantry").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_is_flushed_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("despensa.json");

        let store = JsonFileKeyValueStore::open(&path).await.unwrap();
        store.set("favorites", json!(["Tortilla"])).await.unwrap();

        let reopened = JsonFileKeyValueStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("favorites").await.unwrap(),
            Some(json!(["Tortilla"]))
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("despensa.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileKeyValueStore::open(&path).await;

        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_failed_flush_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("despensa.json");

        let store = JsonFileKeyValueStore::open(&path).await.unwrap();
        store.set("history", json!(["Gazpacho"])).await.unwrap();

        // a directory squatting on the temp file makes the next write fail
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let replaced = store.set("history", json!(["Tortilla"])).await;
        assert!(matches!(replaced, Err(CoreError::StorageError(_))));
        assert_eq!(store.get("history").await.unwrap(), Some(json!(["Gazpacho"])));

        let inserted = store.set("favorites", json!([])).await;
        assert!(matches!(inserted, Err(CoreError::StorageError(_))));
        assert_eq!(store.get("favorites").await.unwrap(), None);
    }
}
