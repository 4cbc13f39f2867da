pub mod catalog;
mod content;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use error::DomainError;

// Re-export catalogs
pub use catalog::{
    disabled_entries, faq_entries, find_faq, is_disabled, is_gated, CoverageReport,
    DescriptorGrid, EntryOverrides, StatDescriptorTable, StatRow, ThemeRegistry,
};

// Re-export entities
pub use entities::{
    CharacterTheme, ColorPalette, GradientSet, ParticleConfig, ParticleType, PatternConfig,
    PatternType, QaEntry, MAX_EFFECT_STRENGTH, MIN_EFFECT_STRENGTH,
};

// Re-export value objects
pub use value_objects::{
    ColorToken, Grade, StatCategory, StatDescription, StatSheet, StatSubcategory, CATEGORY_COUNT,
    GRADE_COUNT, NO_DESCRIPTION, SUBCATEGORIES_PER_CATEGORY, SUBCATEGORY_COUNT,
};
