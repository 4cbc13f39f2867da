//! Theme Registry - location id → bespoke theme.
//!
//! Most locations have no bespoke theme; `get` returning `None` is the normal
//! case and the caller picks its own neutral default.

use std::collections::HashMap;

use crate::content::themes::builtin_themes;
use crate::entities::CharacterTheme;
use crate::error::DomainError;

/// Registered themes in registration order, indexed by location id.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: Vec<CharacterTheme>,
    by_location: HashMap<String, usize>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with the themes compiled into this crate.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_themes(builtin_themes())
    }

    /// Register themes in iteration order.
    pub fn from_themes(
        themes: impl IntoIterator<Item = CharacterTheme>,
    ) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        for theme in themes {
            registry.register(theme)?;
        }
        Ok(registry)
    }

    /// Add a theme. Each location may be themed once.
    pub fn register(&mut self, theme: CharacterTheme) -> Result<(), DomainError> {
        if self.by_location.contains_key(&theme.location_id) {
            return Err(DomainError::validation(format!(
                "location {} already has a theme",
                theme.location_id
            )));
        }
        self.by_location
            .insert(theme.location_id.clone(), self.themes.len());
        self.themes.push(theme);
        Ok(())
    }

    pub fn get(&self, location_id: &str) -> Option<&CharacterTheme> {
        self.by_location
            .get(location_id)
            .and_then(|&i| self.themes.get(i))
    }

    pub fn has(&self, location_id: &str) -> bool {
        self.by_location.contains_key(location_id)
    }

    /// All themes in registration order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &CharacterTheme> + '_ {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Validate every registered theme, stopping at the first bad one.
    pub fn validate(&self) -> Result<(), DomainError> {
        for theme in &self.themes {
            theme.validate().map_err(|e| {
                DomainError::validation(format!("theme {}: {}", theme.location_id, e))
            })?;
        }
        Ok(())
    }
}
