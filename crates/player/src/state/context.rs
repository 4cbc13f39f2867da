//! WikiContext - the container handed to presentation components
//!
//! Built once at startup and passed down explicitly. It owns the read-only
//! catalogs and the single mutable resource, the unlock flag store, so every
//! call site that can change state is visible.

use std::sync::Arc;

use lorevault_domain::{
    is_disabled, CharacterTheme, DomainError, EntryOverrides, Grade, StatDescription,
    StatDescriptorTable, StatRow, StatSheet, StatSubcategory, ThemeRegistry,
};

use crate::config::PlayerConfig;
use crate::infrastructure::storage::create_storage;
use crate::ports::outbound::StorageProvider;
use crate::state::{PlatformStorage, UnlockFlagStore};

#[derive(Clone)]
pub struct WikiContext {
    descriptors: StatDescriptorTable,
    themes: Arc<ThemeRegistry>,
    unlock: Arc<UnlockFlagStore<PlatformStorage>>,
}

impl WikiContext {
    /// Load the builtin content and hydrate the unlock flag from `storage`.
    pub fn new<S>(storage: S) -> Result<Self, DomainError>
    where
        S: StorageProvider + Send + Sync,
    {
        Ok(Self::with_parts(
            StatDescriptorTable::builtin(),
            ThemeRegistry::builtin()?,
            PlatformStorage::new(storage),
        ))
    }

    /// Build with the storage backend selected by configuration.
    pub fn from_config(config: &PlayerConfig) -> Result<Self, DomainError> {
        Ok(Self::with_parts(
            StatDescriptorTable::builtin(),
            ThemeRegistry::builtin()?,
            create_storage(config),
        ))
    }

    pub fn with_parts(
        descriptors: StatDescriptorTable,
        themes: ThemeRegistry,
        storage: PlatformStorage,
    ) -> Self {
        let unlock = UnlockFlagStore::hydrate(storage);
        tracing::debug!(
            themes = themes.len(),
            unlocked = unlock.is_unlocked(),
            "Wiki context ready"
        );
        Self {
            descriptors,
            themes: Arc::new(themes),
            unlock: Arc::new(unlock),
        }
    }

    // -------------------------------------------------------------------------
    // Stats
    // -------------------------------------------------------------------------

    pub fn descriptors(&self) -> &StatDescriptorTable {
        &self.descriptors
    }

    pub fn describe(&self, subcategory: StatSubcategory, grade: Grade) -> StatDescription {
        self.descriptors.describe(subcategory, grade)
    }

    pub fn describe_sheet(&self, sheet: &StatSheet) -> Vec<StatRow> {
        self.descriptors.describe_sheet(sheet)
    }

    // -------------------------------------------------------------------------
    // Themes
    // -------------------------------------------------------------------------

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn theme(&self, location_id: &str) -> Option<&CharacterTheme> {
        self.themes.get(location_id)
    }

    // -------------------------------------------------------------------------
    // Gating
    // -------------------------------------------------------------------------

    pub fn unlock_store(&self) -> &UnlockFlagStore<PlatformStorage> {
        &self.unlock
    }

    /// Whether an entry renders disabled.
    ///
    /// Enabled if either the unlock flag or the session overrides cover it.
    pub fn is_entry_disabled(&self, entry_id: &str, session: Option<&EntryOverrides>) -> bool {
        is_disabled(entry_id, Some(&self.unlock.overrides())) && is_disabled(entry_id, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::{DisabledStorageProvider, InMemoryStorageProvider};

    #[test]
    fn test_lookups_delegate_to_catalogs() {
        let context = WikiContext::new(InMemoryStorageProvider::new()).unwrap();
        assert!(context.theme("the-bloxiverse").is_some());
        assert!(context.theme("nonexistent-location").is_none());
        assert!(context
            .describe(StatSubcategory::Lifting, Grade::A)
            .is_authored());
    }

    #[test]
    fn test_unlock_enables_gated_entries() {
        let context = WikiContext::new(InMemoryStorageProvider::new()).unwrap();
        assert!(context.is_entry_disabled("the-reckoner", None));

        context.unlock_store().unlock();
        assert!(!context.is_entry_disabled("the-reckoner", None));

        context.unlock_store().lock();
        assert!(context.is_entry_disabled("the-reckoner", None));
    }

    #[test]
    fn test_session_overrides_apply_while_locked() {
        let context = WikiContext::new(InMemoryStorageProvider::new()).unwrap();
        let session: EntryOverrides = ["the-reckoner"].into_iter().collect();
        assert!(!context.is_entry_disabled("the-reckoner", Some(&session)));
        assert!(context.is_entry_disabled("vesper-null", Some(&session)));
        assert!(!context.is_entry_disabled("caesar", None));
    }

    #[test]
    fn test_clones_share_unlock_state() {
        let context = WikiContext::new(InMemoryStorageProvider::new()).unwrap();
        let clone = context.clone();
        context.unlock_store().unlock();
        assert!(clone.unlock_store().is_unlocked());
    }

    #[test]
    fn test_disabled_storage_degrades_without_failing() {
        let context = WikiContext::new(DisabledStorageProvider).unwrap();
        assert!(!context.unlock_store().is_unlocked());

        context.unlock_store().unlock();
        assert!(context.unlock_store().is_unlocked());
        assert!(context.unlock_store().is_persistence_degraded());
    }
}
