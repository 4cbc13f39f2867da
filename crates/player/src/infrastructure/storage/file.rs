//! File-backed storage provider
//!
//! Stores key-value pairs in a JSON file at:
//! - Linux: ~/.config/lorevault/player/storage.json
//! - macOS: ~/Library/Application Support/io.lorevault.player/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\lorevault\player\config\storage.json

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{StorageError, StorageProvider};

#[derive(Default)]
struct FileCache {
    values: HashMap<String, String>,
    /// Why the file could not be read at startup. Cleared by the first
    /// successful write, which replaces the file's contents.
    read_error: Option<String>,
}

/// Storage provider persisting a flat JSON object of strings to disk
#[derive(Clone)]
pub struct FileStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<FileCache>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Create a provider at the platform config directory.
    pub fn new() -> Self {
        Self::at_path(Self::default_path())
    }

    /// Platform-specific location of `storage.json`.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "lorevault", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("lorevault_storage.json")
        }
    }

    /// Create a provider at an explicit path.
    ///
    /// Loads existing data if the file exists. An unreadable or corrupt file
    /// is logged, and `load` reports it as unavailable until a write succeeds.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = match Self::read_file(&storage_path) {
            Ok(values) => FileCache {
                values,
                read_error: None,
            },
            Err(e) => {
                tracing::warn!(
                    path = %storage_path.display(),
                    error = %e,
                    "Failed to load storage file, starting empty"
                );
                FileCache {
                    values: HashMap::new(),
                    read_error: Some(e.to_string()),
                }
            }
        };

        tracing::debug!(path = %storage_path.display(), "File storage initialized");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Persist a snapshot of the cache to disk
    fn persist(&self, snapshot: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.storage_path, data)?;
        Ok(())
    }

    fn update(
        &self,
        apply: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), StorageError> {
        let snapshot = {
            let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
            apply(&mut guard.values);
            guard.values.clone()
        }; // Release lock before I/O

        self.persist(&snapshot).inspect_err(|e| {
            tracing::error!(
                path = %self.storage_path.display(),
                error = %e,
                "Failed to write storage file"
            );
        })?;

        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        if guard.read_error.take().is_some() {
            tracing::info!(
                path = %self.storage_path.display(),
                "Storage file rewritten after earlier read failure"
            );
        }
        Ok(())
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|cache| {
            cache.insert(key.to_string(), value.to_string());
        })
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.cache.read().map_err(|_| StorageError::LockPoisoned)?;
        if let Some(reason) = &guard.read_error {
            return Err(StorageError::unavailable(format!(
                "{} could not be read: {}",
                self.storage_path.display(),
                reason
            )));
        }
        Ok(guard.values.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|cache| {
            cache.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_through_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let storage = FileStorageProvider::at_path(&path);

        storage.save("greeting", "hello").unwrap();

        let on_disk: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("greeting").map(String::as_str), Some("hello"));
    }

    #[test]
    fn test_reopen_reads_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStorageProvider::at_path(&path)
            .save("key", "value")
            .unwrap();

        let reopened = FileStorageProvider::at_path(&path);
        assert_eq!(reopened.load("key").unwrap().as_deref(), Some("value"));
        assert_eq!(reopened.load("missing").unwrap(), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorageProvider::at_path(&path);
        storage.save("key", "value").unwrap();
        storage.remove("key").unwrap();

        assert_eq!(FileStorageProvider::at_path(&path).load("key").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_unavailable_until_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorageProvider::at_path(&path);
        let err = storage.load("anything").unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));

        storage.save("key", "value").unwrap();
        assert_eq!(storage.load("key").unwrap().as_deref(), Some("value"));
        assert_eq!(storage.load("anything").unwrap(), None);
        assert_eq!(
            FileStorageProvider::at_path(&path).load("key").unwrap().as_deref(),
            Some("value")
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("storage.json");
        fs::create_dir_all(&path).unwrap();

        let storage = FileStorageProvider::at_path(&path);
        let err = storage.save("key", "value").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        // Nothing was ever read or written, so reads stay unavailable.
        assert!(matches!(
            storage.load("key").unwrap_err(),
            StorageError::Unavailable(_)
        ));
    }
}
