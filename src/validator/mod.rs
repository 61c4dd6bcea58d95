//! Pure predicate and utility functions over text, numbers, dates and
//! CSS colors.
//!
//! Every function here is stateless and side-effect free. All of them are
//! total (malformed input yields `false`, `None` or an empty result) except
//! the date comparisons, which return [`ValidatorError::InvalidArgument`]
//! when an operand is not a date.
//!
//! # Example
//!
//! ```rust
//! use pureform::validator;
//!
//! assert!(validator::is_email_address("jane@example.com"));
//! assert!(validator::is_color("rgb(255, 0, 0)"));
//! assert!(validator::is_between(7, 6, 8));
//!
//! if validator::is_date("2016-02-29") {
//!     assert_eq!(validator::is_before_date("2016-02-29", "2016-03-01"), Ok(true));
//! }
//! ```

mod color;
mod date;
mod error;
mod number;
mod text;

pub use color::{is_color, is_hex, is_hsl, is_rgb, rgba_to_hex};
pub use date::{
    is_after_date, is_after_today, is_before_date, is_before_today, is_date, AsDate,
};
pub use error::ValidatorError;
pub use number::{is_between, is_integer_prefix, is_number};
pub use text::{
    contains, count_words, is_alphanumeric, is_composed_of, is_credit_card, is_email_address,
    is_empty, is_length, is_of_length, is_phone_number, is_trimmed, lacks, less_words_than,
    more_words_than, without_symbols,
};
