//! Session-only storage providers

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{StorageError, StorageProvider};

/// Keeps values for the lifetime of the process only
#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data
            .write()
            .map_err(|_| StorageError::LockPoisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .data
            .read()
            .map_err(|_| StorageError::LockPoisoned)?
            .get(key)
            .cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.data
            .write()
            .map_err(|_| StorageError::LockPoisoned)?
            .remove(key);
        Ok(())
    }
}

/// Storage that refuses every operation, matching a browser with storage disabled
#[derive(Clone, Default)]
pub struct DisabledStorageProvider;

impl StorageProvider for DisabledStorageProvider {
    fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::unavailable(format!(
            "storage is disabled, cannot save {}",
            key
        )))
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::unavailable(format!(
            "storage is disabled, cannot load {}",
            key
        )))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::unavailable(format!(
            "storage is disabled, cannot remove {}",
            key
        )))
    }
}
