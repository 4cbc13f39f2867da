//! Storage provider implementations
//!
//! The backend is selected at startup from `PlayerConfig`; everything above
//! this module sees only the `StorageProvider` port.

mod file;
mod memory;

pub use file::FileStorageProvider;
pub use memory::{DisabledStorageProvider, InMemoryStorageProvider};

use crate::config::{PlayerConfig, StorageBackend};
use crate::state::PlatformStorage;

/// Create the storage handle described by the configuration
pub fn create_storage(config: &PlayerConfig) -> PlatformStorage {
    match config.storage {
        StorageBackend::File => {
            let provider = match &config.storage_path {
                Some(path) => FileStorageProvider::at_path(path),
                None => FileStorageProvider::new(),
            };
            PlatformStorage::new(provider)
        }
        StorageBackend::Memory => PlatformStorage::new(InMemoryStorageProvider::new()),
        StorageBackend::Disabled => PlatformStorage::new(DisabledStorageProvider),
    }
}
