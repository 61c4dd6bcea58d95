//! Validator error types.

use thiserror::Error;

/// Errors raised by validator functions.
///
/// Only the date comparisons can fail; every other validator is total.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidatorError {
    /// An operand could not be read as a calendar date
    #[error("Invalid date: {input}")]
    InvalidArgument { input: String },
}
