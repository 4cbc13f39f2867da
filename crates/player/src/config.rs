//! Player configuration read from the environment
//!
//! - `LOREVAULT_STORAGE`: `file` (default), `memory`, or `disabled`
//! - `LOREVAULT_STORAGE_PATH`: override the storage file location

use std::path::PathBuf;

pub const STORAGE_ENV: &str = "LOREVAULT_STORAGE";
pub const STORAGE_PATH_ENV: &str = "LOREVAULT_STORAGE_PATH";

/// Which storage backend holds persisted state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// JSON file in the platform config directory
    #[default]
    File,
    /// Session only; nothing survives a restart
    Memory,
    /// Every storage operation fails, as with browser storage switched off
    Disabled,
}

impl StorageBackend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "memory" => Some(Self::Memory),
            "disabled" | "off" => Some(Self::Disabled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    pub storage: StorageBackend,
    pub storage_path: Option<PathBuf>,
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup(STORAGE_ENV) {
            Some(raw) => StorageBackend::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    "Unknown {} value, using file storage",
                    STORAGE_ENV
                );
                StorageBackend::default()
            }),
            None => StorageBackend::default(),
        };

        let storage_path = lookup(STORAGE_PATH_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            storage,
            storage_path,
        }
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
