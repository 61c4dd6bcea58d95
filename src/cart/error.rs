//! Cart error types.

use thiserror::Error;

/// Errors raised while loading cart configuration.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse cart configuration: {0}")]
    ParseFailed(#[from] serde_json::Error),
}
