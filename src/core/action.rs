//! Core Action trait for store actions.
//!
//! Actions are immutable tagged records describing an intended state
//! transition. They carry no behaviour of their own; reducers give them
//! meaning.

use std::fmt::Debug;

/// Trait for actions dispatched to a [`Store`](crate::store::Store).
///
/// # Required Traits
///
/// - `Clone`: actions may be re-dispatched or logged after dispatch
/// - `Debug`: actions must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use pureform::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Init,
///     Increment,
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Init => "INIT",
///             Self::Increment => "INCREMENT",
///             Self::Reset => "RESET",
///         }
///     }
///
///     fn seed() -> Self {
///         Self::Init
///     }
/// }
///
/// assert_eq!(CounterAction::seed().name(), "INIT");
/// ```
pub trait Action: Clone + Debug {
    /// Get the action's tag for display/logging.
    fn name(&self) -> &str;

    /// The no-op action dispatched once when a store is created.
    ///
    /// Reducers must treat it as an identity transition so the seeded
    /// state equals the reducer's initial state.
    fn seed() -> Self;
}
