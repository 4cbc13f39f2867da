//! Player crate.
//!
//! Owns everything between the static content in `lorevault-domain` and the
//! presentation layer: the storage port and its adapters, the unlock flag
//! store, and the `WikiContext` container handed to components.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use config::{PlayerConfig, StorageBackend};
pub use ports::outbound::{storage_keys, StorageError, StorageProvider};
pub use state::{PlatformStorage, UnlockFlagStore, WikiContext};
