use serde::Serialize;
use std::fmt;

/// Placeholder text rendered for a (subcategory, grade) pair with no authored description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Result of a stat descriptor lookup.
///
/// A missing description is a normal outcome, not an error. Callers that want
/// a placeholder can match on `Unavailable` instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum StatDescription {
    /// Canonical authored text, never empty
    Authored(&'static str),
    /// Nothing authored for this combination yet
    Unavailable,
}

impl StatDescription {
    /// Text to render, falling back to [`NO_DESCRIPTION`].
    pub fn text(&self) -> &'static str {
        match self {
            Self::Authored(text) => text,
            Self::Unavailable => NO_DESCRIPTION,
        }
    }

    pub fn as_authored(&self) -> Option<&'static str> {
        match self {
            Self::Authored(text) => Some(text),
            Self::Unavailable => None,
        }
    }

    pub fn is_authored(&self) -> bool {
        matches!(self, Self::Authored(_))
    }
}

impl From<Option<&'static str>> for StatDescription {
    fn from(value: Option<&'static str>) -> Self {
        match value {
            Some(text) if !text.trim().is_empty() => Self::Authored(text),
            _ => Self::Unavailable,
        }
    }
}

impl fmt::Display for StatDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
