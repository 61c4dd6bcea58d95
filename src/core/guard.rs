//! Guard predicates over input values.
//!
//! Guards wrap pure boolean functions so predicates can be stored,
//! combined and evaluated later, e.g. as form field rules.

use std::marker::PhantomData;

/// Pure predicate over a value of type `T`.
///
/// # Example
///
/// ```rust
/// use pureform::core::Guard;
/// use pureform::validator::is_email_address;
///
/// let email = Guard::new(|s: &str| is_email_address(s));
///
/// assert!(email.check("jane@example.com"));
/// assert!(!email.check("jane.example.com"));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized + 'static> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic with no side effects and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard accepts this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Guard that accepts only when both guards accept.
    ///
    /// ```rust
    /// use pureform::core::Guard;
    /// use pureform::validator::{is_alphanumeric, is_of_length};
    ///
    /// let username = Guard::new(|s: &str| is_alphanumeric(s))
    ///     .and(Guard::new(|s: &str| is_of_length(s, 2)));
    ///
    /// assert!(username.check("ab1"));
    /// assert!(!username.check("a"));
    /// assert!(!username.check("a b"));
    /// ```
    pub fn and(self, other: Guard<T>) -> Self {
        Guard::new(move |value: &T| self.check(value) && other.check(value))
    }

    /// Guard that accepts when the wrapped guard rejects.
    pub fn negate(self) -> Self {
        Guard::new(move |value: &T| !self.check(value))
    }
}
