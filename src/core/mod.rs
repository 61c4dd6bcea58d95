//! Core traits shared by the store and its reducers.
//!
//! This module contains the pure functional core:
//! - Action definitions via the `Action` trait
//! - Reducers via the `Reducer` trait
//! - Guard predicates over input values
//!
//! Nothing in this module performs side effects.

mod action;
mod guard;
mod reducer;

pub use action::Action;
pub use guard::Guard;
pub use reducer::Reducer;
