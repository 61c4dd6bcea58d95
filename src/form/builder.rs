//! Builder API for creating form rules.

use crate::core::Guard;
use crate::form::rules::{FieldRule, FormRules};
use crate::validator::is_empty;

/// Builder for creating form rules
pub struct FormBuilder {
    rules: Vec<FieldRule>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a predicate the field's value must satisfy
    pub fn require<F>(self, field: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.require_guard(field, Guard::new(predicate), message)
    }

    /// Add a prebuilt guard, e.g. one composed with [`Guard::and`]
    pub fn require_guard(
        mut self,
        field: impl Into<String>,
        guard: Guard<str>,
        message: impl Into<String>,
    ) -> Self {
        self.rules.push(FieldRule {
            field: field.into(),
            guard,
            message: message.into(),
        });
        self
    }

    /// Require a non-blank value
    pub fn require_present(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.require(field, |value| !is_empty(Some(value)), message)
    }

    /// Build the form rules
    pub fn build(self) -> FormRules {
        FormRules { rules: self.rules }
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
