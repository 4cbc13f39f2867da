//! Entities - content records identified by a stable slug

mod character_theme;
mod qa_entry;

pub use character_theme::{
    CharacterTheme, ColorPalette, GradientSet, ParticleConfig, ParticleType, PatternConfig,
    PatternType, MAX_EFFECT_STRENGTH, MIN_EFFECT_STRENGTH,
};
pub use qa_entry::QaEntry;
