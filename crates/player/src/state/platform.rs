//! Type-erased platform storage handle
//!
//! `StorageProvider` is `Clone`, so it cannot be used as a trait object
//! directly. `PlatformStorage` wraps any provider behind an `Arc<dyn ...>` so
//! the context can hold one concrete type regardless of the backend chosen at
//! startup.

use std::sync::Arc;

use crate::ports::outbound::{StorageError, StorageProvider};

// =============================================================================
// Dynamic trait version for Arc storage (needs Send + Sync to share the context)
// =============================================================================

// Method names differ from `StorageProvider` so both traits can be in scope.
trait StorageProviderDyn: Send + Sync {
    fn save_dyn(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn load_dyn(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn remove_dyn(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save_dyn(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.save(key, value)
    }
    fn load_dyn(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.load(key)
    }
    fn remove_dyn(&self, key: &str) -> Result<(), StorageError> {
        self.remove(key)
    }
}

/// Storage handle shared by every state store in the context
#[derive(Clone)]
pub struct PlatformStorage {
    inner: Arc<dyn StorageProviderDyn>,
}

impl PlatformStorage {
    pub fn new<S>(provider: S) -> Self
    where
        S: StorageProvider + Send + Sync,
    {
        Self {
            inner: Arc::new(provider),
        }
    }
}

impl StorageProvider for PlatformStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.save_dyn(key, value)
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load_dyn(key)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_dyn(key)
    }
}
