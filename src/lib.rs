//! Pureform: pure validators and reducer-driven state stores
//!
//! Pureform keeps domain logic in pure functions. Validators are plain
//! predicates over strings, numbers, dates and colors. Application state
//! lives in a [`Store`], which only changes by running a [`Reducer`]
//! over dispatched [`Action`]s and then notifying subscribers.
//!
//! # Modules
//!
//! - [`validator`]: text, number, date and color predicates
//! - [`store`]: generic single-state container with subscriptions
//! - [`calculator`]: calculator display reducer and expression evaluator
//! - [`cart`]: shopping cart reducer, coupons and price totals
//! - [`form`]: accumulate field errors over a submitted form
//! - [`snapshot`]: versioned JSON / binary snapshots of store state
//!
//! # Example
//!
//! ```rust
//! use pureform::cart::{totals, CartAction, CartReducer, Product};
//! use pureform::Store;
//!
//! let store = Store::new(CartReducer::default());
//! store.dispatch(CartAction::Add {
//!     product: Product::new(1, "Notebook", 20.0, "A5, dotted"),
//! });
//!
//! let state = store.state();
//! assert_eq!(state.cart, 1);
//!
//! let summary = totals(&state, store.reducer().config());
//! assert_eq!(summary.grand_total, 36.0);
//! ```

pub mod calculator;
pub mod cart;
pub mod core;
pub mod form;
pub mod snapshot;
pub mod store;
pub mod validator;

// Re-export commonly used types
pub use core::{Action, Guard, Reducer};
pub use store::{Store, Subscription};
