//! Field-level form validation.
//!
//! A [`FormRules`] set attaches predicates to named fields and checks a
//! submitted [`Form`] with `stillwater::Validation`, so every failing
//! field is reported at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use pureform::form::{FieldError, Form, FormBuilder};
//! use pureform::validator::is_email_address;
//!
//! let rules = FormBuilder::new()
//!     .require_present("name", "Please input a valid name")
//!     .require("email", is_email_address, "Please input a valid email")
//!     .build();
//!
//! let form = Form::new().with("name", " ").with("email", "nobody");
//! let errors = rules.errors(&form);
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1], FieldError::Invalid {
//!     field: "email".into(),
//!     message: "Please input a valid email".into(),
//! });
//! ```

mod builder;
mod errors;
mod fields;
pub mod presets;
mod rules;

pub use builder::FormBuilder;
pub use errors::FieldError;
pub use fields::Form;
pub use rules::FormRules;
