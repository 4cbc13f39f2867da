//! Unlock Flag Store - whether the reader has unlocked gated lore entries.
//!
//! The flag is hydrated from storage once, read from memory afterwards, and
//! written through to storage on every change. Storage failures never reach
//! the caller: they are logged and the in-memory value stays authoritative
//! (degraded-persistence mode).

use std::sync::{PoisonError, RwLock};

use lorevault_domain::EntryOverrides;

use crate::ports::outbound::{storage_keys, StorageProvider};

const TRUE: &str = "true";
const FALSE: &str = "false";

#[derive(Debug, Clone, Copy, Default)]
struct UnlockState {
    unlocked: bool,
    /// The last storage read or write succeeded
    persisted: bool,
    /// Storage holds something other than `"true"`/`"false"`
    needs_rewrite: bool,
}

pub struct UnlockFlagStore<S: StorageProvider> {
    storage: S,
    state: RwLock<UnlockState>,
}

impl<S: StorageProvider> UnlockFlagStore<S> {
    /// Read the persisted flag and build the store.
    ///
    /// A missing key, an unexpected value, or an unreadable store all start
    /// the session locked.
    pub fn hydrate(storage: S) -> Self {
        let state = match storage.load(storage_keys::LORE_UNLOCKED) {
            Ok(None) => UnlockState {
                unlocked: false,
                persisted: true,
                needs_rewrite: false,
            },
            Ok(Some(value)) => match value.as_str() {
                TRUE => UnlockState {
                    unlocked: true,
                    persisted: true,
                    needs_rewrite: false,
                },
                FALSE => UnlockState {
                    unlocked: false,
                    persisted: true,
                    needs_rewrite: false,
                },
                other => {
                    tracing::warn!(
                        key = storage_keys::LORE_UNLOCKED,
                        value = %other,
                        "Unexpected unlock flag value, treating as locked"
                    );
                    UnlockState {
                        unlocked: false,
                        persisted: true,
                        needs_rewrite: true,
                    }
                }
            },
            Err(e) => {
                tracing::warn!(
                    key = storage_keys::LORE_UNLOCKED,
                    error = %e,
                    "Failed to read unlock flag, starting locked"
                );
                UnlockState::default()
            }
        };

        tracing::debug!(unlocked = state.unlocked, "Unlock flag hydrated");

        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .unlocked
    }

    /// Whether storage could not be read at startup or the last write to it
    /// failed, so storage may disagree with [`is_unlocked`](Self::is_unlocked).
    ///
    /// An unexpected stored value is not a storage failure and does not count.
    pub fn is_persistence_degraded(&self) -> bool {
        !self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .persisted
    }

    pub fn unlock(&self) {
        self.set(true);
    }

    pub fn lock(&self) {
        self.set(false);
    }

    /// Override set implied by the flag: every gated entry when unlocked.
    pub fn overrides(&self) -> EntryOverrides {
        if self.is_unlocked() {
            EntryOverrides::unlock_all()
        } else {
            EntryOverrides::new()
        }
    }

    fn set(&self, unlocked: bool) {
        // Held across the write so set-and-persist is atomic to other readers.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.unlocked == unlocked && state.persisted && !state.needs_rewrite {
            return;
        }

        let changed = state.unlocked != unlocked;
        state.unlocked = unlocked;

        let value = if unlocked { TRUE } else { FALSE };
        match self.storage.save(storage_keys::LORE_UNLOCKED, value) {
            Ok(()) => {
                if !state.persisted {
                    tracing::info!("Unlock flag persisted after earlier storage failure");
                }
                state.persisted = true;
                state.needs_rewrite = false;
            }
            Err(e) => {
                state.persisted = false;
                tracing::warn!(
                    key = storage_keys::LORE_UNLOCKED,
                    error = %e,
                    "Failed to persist unlock flag, keeping in-memory value"
                );
            }
        }

        if changed {
            tracing::info!(unlocked, "Lore unlock flag changed");
        }
    }
}
