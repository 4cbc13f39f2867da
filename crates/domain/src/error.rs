//! Unified error types for the domain layer
//!
//! Lookups never fail: a missing description or an unthemed location is a normal
//! outcome expressed through `StatDescription::Unavailable` or `None`. This error
//! type covers construction-time failures (parsing a grade, registering content)
//! and content validation.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., authored content out of its documented range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for content rule violations.
    ///
    /// Use this when authored content breaks a documented constraint:
    /// - An authored description is empty
    /// - A theme value is outside its normalized range
    /// - A location is registered twice
    ///
    /// # Example
    /// ```ignore
    /// if text.is_empty() {
    ///     return Err(DomainError::validation("description cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Grade {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "F" => Ok(Self::F),
    ///             _ => Err(DomainError::parse(format!("Unknown grade: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
