//! Outbound ports - interfaces the player layer depends on

pub mod platform;

pub use platform::{storage_keys, StorageError, StorageProvider};
