//! Field-level validation errors.

use thiserror::Error;

/// A single failed field rule
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field {field} is missing")]
    Missing { field: String },

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl FieldError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }
}
