//! Error types for schema extraction.

use thiserror::Error;

/// Errors that abort an extraction pass.
///
/// Incomplete constructs are not errors: they are left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A directive definition names a location outside both location vocabularies.
    #[error(
        "invalid directive location '{location}': not an executable or type system directive location"
    )]
    InvalidDirectiveLocation { location: String },
}

impl SchemaError {
    /// Create an invalid directive location error.
    pub fn invalid_location(location: impl Into<String>) -> Self {
        Self::InvalidDirectiveLocation {
            location: location.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SchemaError>;
