//! Entry Gating Set - which content entries render as disabled.
//!
//! An entry is disabled when it is in the static disabled set and the caller's
//! override set does not name it. The override set is client state, so this is
//! a presentation gate and not access control: anyone can build an override
//! set that names every entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::content::gated_entries::DISABLED_ENTRIES;

/// Entries force-enabled for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOverrides {
    entries: BTreeSet<String>,
}

impl EntryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides covering every gated entry.
    pub fn unlock_all() -> Self {
        DISABLED_ENTRIES.iter().copied().collect()
    }

    /// Force-enable an entry. Returns false if it was already overridden.
    pub fn insert(&mut self, entry_id: impl Into<String>) -> bool {
        self.entries.insert(entry_id.into())
    }

    pub fn remove(&mut self, entry_id: &str) -> bool {
        self.entries.remove(entry_id)
    }

    pub fn contains(&self, entry_id: &str) -> bool {
        self.entries.contains(entry_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for EntryOverrides {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The static disabled set, in authored order.
pub fn disabled_entries() -> &'static [&'static str] {
    DISABLED_ENTRIES
}

/// Whether an entry is in the static disabled set, ignoring overrides.
pub fn is_gated(entry_id: &str) -> bool {
    DISABLED_ENTRIES.contains(&entry_id)
}

/// Whether an entry should render as disabled. Overrides win.
pub fn is_disabled(entry_id: &str, overrides: Option<&EntryOverrides>) -> bool {
    is_gated(entry_id) && !overrides.is_some_and(|o| o.contains(entry_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gated_entry_is_disabled_without_overrides() {
        assert!(is_disabled("the-reckoner", None));
        assert!(is_disabled("the-reckoner", Some(&EntryOverrides::new())));
    }

    #[test]
    fn test_override_wins() {
        let overrides: EntryOverrides = ["the-reckoner"].into_iter().collect();
        assert!(!is_disabled("the-reckoner", Some(&overrides)));
        assert!(is_disabled("the-hollow-king", Some(&overrides)));
    }

    #[test]
    fn test_ungated_entry_is_never_disabled() {
        assert!(!is_disabled("caesar", None));
        let overrides: EntryOverrides = ["caesar", "the-reckoner"].into_iter().collect();
        assert!(!is_disabled("caesar", Some(&overrides)));
        assert!(!is_disabled("caesar", Some(&EntryOverrides::unlock_all())));
    }

    #[test]
    fn test_unlock_all_covers_every_gated_entry() {
        let overrides = EntryOverrides::unlock_all();
        assert_eq!(overrides.len(), disabled_entries().len());
        for entry in disabled_entries() {
            assert!(!is_disabled(entry, Some(&overrides)));
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(!is_disabled("The-Reckoner", None));
        assert!(!is_disabled(" the-reckoner", None));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut overrides = EntryOverrides::new();
        assert!(overrides.insert("vesper-null"));
        assert!(!overrides.insert("vesper-null"));
        assert!(!is_disabled("vesper-null", Some(&overrides)));
        assert!(overrides.remove("vesper-null"));
        assert!(is_disabled("vesper-null", Some(&overrides)));
    }
}
