//! Read-only catalogs over the static content
//!
//! Every lookup here is pure and never fails: absent content is reported as
//! `None` or `StatDescription::Unavailable`.

pub mod entry_gate;
pub mod faq;
pub mod stat_descriptors;
pub mod theme_registry;

pub use entry_gate::{disabled_entries, is_disabled, is_gated, EntryOverrides};
pub use faq::{faq_entries, find_faq};
pub use stat_descriptors::{CoverageReport, DescriptorGrid, StatDescriptorTable, StatRow};
pub use theme_registry::ThemeRegistry;
