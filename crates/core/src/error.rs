//! Error types for record mapping.

/// Result type for mapping operations.
pub type MapperResult<T> = Result<T, MapperError>;

/// Errors raised while turning records into entities.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// A date field does not follow `YYYY-MM-DD`.
    #[error("Invalid date format for {value:?}: date format must be YYYY-MM-DD")]
    InvalidDateFormat { value: String },

    /// The record handed to `decode` is not a JSON object.
    #[error("Expected a {entity_type} record object, got {found}")]
    NotAnObject {
        entity_type: &'static str,
        found: &'static str,
    },

    /// A field value has the wrong shape for the entity schema.
    #[error("Failed to decode {entity_type} record: {source}")]
    Decode {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl MapperError {
    /// Check if this error came from date validation.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDateFormat { .. })
    }
}
