//! Entries hidden behind the lore gate until a reader unlocks them.
//!
//! Changing this list requires shipping new content; there is no runtime API
//! that adds to it.

pub(crate) const DISABLED_ENTRIES: &[&str] = &[
    "the-reckoner",
    "the-hollow-king",
    "the-last-archivist",
    "vesper-null",
    "the-unwritten",
    "project-ouroboros",
];
