//! The Reducer trait: a pure `(State, Action) -> State` function.

use super::action::Action;
use std::fmt::Debug;

/// Pure function mapping the current state and an action to the next state.
///
/// Implementations must have no side effects. For an action they do not
/// recognise they return the input state unchanged.
///
/// # Example
///
/// ```rust
/// use pureform::core::{Action, Reducer};
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Init,
///     Increment,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Init => "INIT",
///             Self::Increment => "INCREMENT",
///         }
///     }
///
///     fn seed() -> Self {
///         Self::Init
///     }
/// }
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = u32;
///     type Action = CounterAction;
///
///     fn initial_state(&self) -> u32 {
///         0
///     }
///
///     fn reduce(&self, state: &u32, action: &CounterAction) -> u32 {
///         match action {
///             CounterAction::Increment => state + 1,
///             CounterAction::Init => *state,
///         }
///     }
/// }
///
/// let counter = Counter;
/// let next = counter.reduce(&counter.initial_state(), &CounterAction::Increment);
/// assert_eq!(next, 1);
/// ```
pub trait Reducer {
    /// Application state owned by this reducer.
    type State: Clone + Debug;

    /// Actions understood by this reducer.
    type Action: Action;

    /// State used when there is no previous state yet.
    fn initial_state(&self) -> Self::State;

    /// Compute the next state. Must not mutate anything.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
