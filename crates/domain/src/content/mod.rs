//! Authored static content, compiled into the crate

pub(crate) mod faq;
pub(crate) mod gated_entries;
pub(crate) mod stat_descriptions;
pub(crate) mod themes;
