//! Shopping cart reducer and checkout totals.
//!
//! The cart state tracks products, per-product quantities and the active
//! coupon. Prices are derived on demand with [`totals`] from the state and
//! a [`CartConfig`]; nothing monetary is stored in the state.
//!
//! # Example
//!
//! ```rust
//! use pureform::cart::{totals, CartAction, CartReducer, Product};
//! use pureform::store::Store;
//!
//! let store = Store::new(CartReducer::default());
//! let mug = Product::new(7, "mug", 10.0, "ceramic");
//!
//! store.dispatch(CartAction::Add { product: mug.clone() });
//! store.dispatch(CartAction::Add { product: mug });
//!
//! let summary = store.with_state(|state| totals(state, store.reducer().config()));
//! assert_eq!(summary.grand_total, 36.0);
//! ```

mod config;
mod error;
mod model;
mod reducer;
mod totals;

pub use config::CartConfig;
pub use error::CartError;
pub use model::{CartActionKind, CartState, Discount, Product, ProductId};
pub use reducer::{CartAction, CartReducer};
pub use totals::{round_price, totals, Totals};
