//! Cart data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a product in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product that can be put in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub desc: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, desc: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            desc: desc.into(),
        }
    }
}

/// The active coupon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub code: String,
    pub fraction: f64,
}

/// Tag of the last item-changing action, used by views to decide what to
/// re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CartActionKind {
    Add,
    Remove,
    Increase,
    Decrease,
}

/// Shopping cart state.
///
/// Invariants maintained by the reducer (given callers honour the
/// decrease contract): every id in `items` has a positive `quantity`
/// entry and `cart` equals the sum of all quantities.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Total number of units in the cart
    pub cart: i64,
    /// Distinct products, in the order they were first added
    pub items: Vec<Product>,
    /// Units per product
    pub quantity: BTreeMap<ProductId, i64>,
    /// Last item-changing action
    pub action: Option<CartActionKind>,
    /// At most one active coupon
    pub discount: Option<Discount>,
}

impl CartState {
    /// Units of `id` in the cart (0 if absent).
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.quantity.get(&id).copied().unwrap_or(0)
    }

    /// Look up a product in the cart.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart == 0
    }
}
