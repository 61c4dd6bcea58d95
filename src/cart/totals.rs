//! Order totals derived from cart state. Never stored in the state.

use super::config::CartConfig;
use super::model::CartState;
use serde::Serialize;

/// Slack for binary artifacts before rounding up (`0.15 * 20` must stay
/// at 3, not become 4).
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Round up to the nearest 0.05, then fix to 2 decimals.
///
/// ```rust
/// use pureform::cart::round_price;
///
/// assert_eq!(round_price(1.0), 1.0);
/// assert_eq!(round_price(1.01), 1.05);
/// assert_eq!(round_price(1.06), 1.1);
/// ```
pub fn round_price(amount: f64) -> f64 {
    let stepped = (amount * 20.0 - ROUNDING_TOLERANCE).ceil() / 20.0;
    unsigned_zero((stepped * 100.0).round() / 100.0)
}

/// `-0.0` prints as `-0.00`; fold it into `0.0`.
fn unsigned_zero(amount: f64) -> f64 {
    if amount == 0.0 {
        0.0
    } else {
        amount
    }
}

/// Price breakdown shown on the checkout summary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Totals {
    /// Σ price × quantity, unrounded
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    /// Amount taken off by the active coupon (0 without one)
    pub discount: f64,
    pub grand_total: f64,
}

/// Compute the checkout totals for a cart.
///
/// ```rust
/// use pureform::cart::{totals, CartConfig, CartState, Product, ProductId};
///
/// let mut state = CartState::default();
/// state.items.push(Product::new(1, "mug", 10.0, "ceramic"));
/// state.quantity.insert(ProductId(1), 2);
/// state.cart = 2;
///
/// let totals = totals(&state, &CartConfig::default());
/// assert_eq!(totals.subtotal, 20.0);
/// assert_eq!(totals.tax, 1.0);
/// assert_eq!(totals.grand_total, 36.0);
/// ```
pub fn totals(state: &CartState, config: &CartConfig) -> Totals {
    let subtotal = unsigned_zero(
        state
            .items
            .iter()
            .map(|item| item.price * state.quantity_of(item.id) as f64)
            .sum(),
    );

    let fraction = state.discount.as_ref().map_or(0.0, |d| d.fraction);
    let reduction = subtotal * fraction;
    let tax = round_price(subtotal * config.tax_rate);

    Totals {
        subtotal,
        tax,
        shipping: config.shipping_fee,
        discount: if fraction > 0.0 {
            round_price(reduction)
        } else {
            0.0
        },
        grand_total: round_price(subtotal + tax + config.shipping_fee - reduction),
    }
}
