//! Form rules evaluated with Validation.

use crate::core::Guard;
use crate::form::errors::FieldError;
use crate::form::fields::Form;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One rule attached to a field.
pub(crate) struct FieldRule {
    pub(crate) field: String,
    pub(crate) guard: Guard<str>,
    pub(crate) message: String,
}

/// Rules for a whole form.
/// Uses Validation to accumulate ALL failing fields.
pub struct FormRules {
    pub(crate) rules: Vec<FieldRule>,
}

impl FormRules {
    /// Check every rule, accumulating ALL failures.
    ///
    /// A field absent from the form is reported once as
    /// [`FieldError::Missing`], however many rules mention it.
    pub fn validate(&self, form: &Form) -> Validation<(), NonEmptyVec<FieldError>> {
        let mut missing = BTreeSet::new();
        let mut checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = Vec::new();

        for rule in &self.rules {
            let check = match form.get(&rule.field) {
                Some(value) if rule.guard.check(value) => Validation::success(()),
                Some(_) => Validation::fail(FieldError::Invalid {
                    field: rule.field.clone(),
                    message: rule.message.clone(),
                }),
                None => {
                    if !missing.insert(rule.field.as_str()) {
                        continue;
                    }
                    Validation::fail(FieldError::Missing {
                        field: rule.field.clone(),
                    })
                }
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Failures as a plain list, empty when the form is valid.
    pub fn errors(&self, form: &Form) -> Vec<FieldError> {
        match self.validate(form) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Fields that have at least one rule, in declaration order.
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.rules
            .iter()
            .map(|rule| rule.field.as_str())
            .filter(|field| seen.insert(*field))
            .collect()
    }
}
