//! End-to-end checks of the wiki context against real file storage.

use std::fs;

use lorevault_domain::{
    is_disabled, EntryOverrides, Grade, ParticleType, StatDescription, StatSubcategory,
};
use lorevault_player::infrastructure::storage::FileStorageProvider;
use lorevault_player::{storage_keys, PlayerConfig, StorageBackend, StorageProvider, WikiContext};

fn file_config(dir: &tempfile::TempDir) -> PlayerConfig {
    PlayerConfig {
        storage: StorageBackend::File,
        storage_path: Some(dir.path().join("storage.json")),
    }
}

#[test]
fn unlock_survives_restart_with_storage_intact() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let context = WikiContext::from_config(&config).unwrap();
    assert!(!context.unlock_store().is_unlocked());
    context.unlock_store().unlock();
    assert!(context.unlock_store().is_unlocked());
    drop(context);

    let restarted = WikiContext::from_config(&config).unwrap();
    assert!(restarted.unlock_store().is_unlocked());

    restarted.unlock_store().lock();
    assert!(!restarted.unlock_store().is_unlocked());
    drop(restarted);

    let again = WikiContext::from_config(&config).unwrap();
    assert!(!again.unlock_store().is_unlocked());
}

#[test]
fn persisted_value_is_literal_text() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let context = WikiContext::from_config(&config).unwrap();

    context.unlock_store().unlock();
    let storage = FileStorageProvider::at_path(dir.path().join("storage.json"));
    assert_eq!(
        storage.load(storage_keys::LORE_UNLOCKED).unwrap().as_deref(),
        Some("true")
    );

    context.unlock_store().lock();
    let storage = FileStorageProvider::at_path(dir.path().join("storage.json"));
    assert_eq!(
        storage.load(storage_keys::LORE_UNLOCKED).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn second_unlock_leaves_storage_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let context = WikiContext::from_config(&file_config(&dir)).unwrap();

    context.unlock_store().unlock();
    let after_first = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    context.unlock_store().unlock();
    assert!(context.unlock_store().is_unlocked());
    // No write happened, so the removed file was not recreated.
    assert!(!path.exists());
    assert!(after_first.contains("\"true\""));
}

#[test]
fn unwritable_storage_does_not_fail_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::create_dir_all(&path).unwrap();

    let context = WikiContext::from_config(&PlayerConfig {
        storage: StorageBackend::File,
        storage_path: Some(path),
    })
    .unwrap();

    context.unlock_store().unlock();
    assert!(context.unlock_store().is_unlocked());
    assert!(context.unlock_store().is_persistence_degraded());
    assert!(!context.is_entry_disabled("the-reckoner", None));
}

#[test]
fn corrupt_storage_file_is_reported_as_degraded() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    fs::write(dir.path().join("storage.json"), "{not json").unwrap();

    let context = WikiContext::from_config(&config).unwrap();
    assert!(!context.unlock_store().is_unlocked());
    assert!(context.unlock_store().is_persistence_degraded());

    // A successful write replaces the unreadable file.
    context.unlock_store().unlock();
    assert!(!context.unlock_store().is_persistence_degraded());
    drop(context);

    let restarted = WikiContext::from_config(&config).unwrap();
    assert!(restarted.unlock_store().is_unlocked());
    assert!(!restarted.unlock_store().is_persistence_degraded());
}

#[test]
fn gating_rules() {
    assert!(is_disabled("the-reckoner", None));
    let overrides: EntryOverrides = ["the-reckoner"].into_iter().collect();
    assert!(!is_disabled("the-reckoner", Some(&overrides)));
    assert!(!is_disabled("caesar", None));
    assert!(!is_disabled("caesar", Some(&overrides)));
}

#[test]
fn themes_and_descriptions_through_context() {
    let context = WikiContext::from_config(&PlayerConfig {
        storage: StorageBackend::Memory,
        storage_path: None,
    })
    .unwrap();

    let theme = context.theme("the-bloxiverse").unwrap();
    assert!(ParticleType::ALL.contains(&theme.particles.kind()));
    assert!((0.0..=1.0).contains(&theme.patterns.opacity()));
    assert!(context.theme("nonexistent-location").is_none());

    for sub in StatSubcategory::ALL {
        for grade in Grade::ALL {
            if let StatDescription::Authored(text) = context.describe(sub, grade) {
                assert!(!text.is_empty());
            }
        }
    }
}
