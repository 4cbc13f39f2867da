//! Platform abstraction ports for persistent storage
//!
//! These traits abstract platform-specific storage so that:
//! 1. State stores stay platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations
//!
//! NOTE: The type-erased `PlatformStorage` handle that wraps these traits
//! lives in `state/platform.rs`, not here. Ports contain only definitions.

use thiserror::Error;

/// Failure talking to the backing key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is switched off or rejected the operation (quota, permissions)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous writer panicked while holding the cache lock
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Persistent key-value storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns `Ok(None)` if not found
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// Lore unlock flag, stored as the literal text "true" or "false"
    pub const LORE_UNLOCKED: &str = "lorevault_lore_unlocked";
}
