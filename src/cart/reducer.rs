//! Cart actions and reducer.

use super::config::CartConfig;
use super::model::{CartActionKind, CartState, Discount, Product, ProductId};
use crate::core::{Action, Reducer};
use serde::{Deserialize, Serialize};

/// Cart interactions, in the `{ "type": ..., payload }` wire shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum CartAction {
    Seed,
    Add { product: Product },
    Remove { id: ProductId },
    Increase { id: ProductId },
    Decrease { id: ProductId },
    Discount {
        #[serde(rename = "discount")]
        code: String,
    },
}

impl CartAction {
    /// The action a "decrease" button should dispatch: `Remove` when one
    /// unit is left, `Decrease` otherwise.
    ///
    /// ```rust
    /// use pureform::cart::{CartAction, CartState, ProductId};
    ///
    /// let mut state = CartState::default();
    /// state.quantity.insert(ProductId(1), 1);
    /// state.quantity.insert(ProductId(2), 3);
    ///
    /// assert_eq!(CartAction::step_down(&state, ProductId(1)), CartAction::Remove { id: ProductId(1) });
    /// assert_eq!(CartAction::step_down(&state, ProductId(2)), CartAction::Decrease { id: ProductId(2) });
    /// ```
    pub fn step_down(state: &CartState, id: ProductId) -> Self {
        if state.quantity_of(id) <= 1 {
            Self::Remove { id }
        } else {
            Self::Decrease { id }
        }
    }
}

impl Action for CartAction {
    fn name(&self) -> &str {
        match self {
            Self::Seed => "SEED",
            Self::Add { .. } => "ADD",
            Self::Remove { .. } => "REMOVE",
            Self::Increase { .. } => "INCREASE",
            Self::Decrease { .. } => "DECREASE",
            Self::Discount { .. } => "DISCOUNT",
        }
    }

    fn seed() -> Self {
        Self::Seed
    }
}

/// Reducer implementing the shopping cart transitions.
#[derive(Clone, Debug, Default)]
pub struct CartReducer {
    config: CartConfig,
}

impl CartReducer {
    pub fn new(config: CartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    fn add(state: &CartState, product: &Product) -> CartState {
        let mut next = state.clone();
        if !next.quantity.contains_key(&product.id) {
            next.items.push(product.clone());
        }
        *next.quantity.entry(product.id).or_insert(0) += 1;
        next.cart += 1;
        next.action = Some(CartActionKind::Add);
        next
    }

    fn remove(state: &CartState, id: ProductId) -> CartState {
        let mut next = state.clone();
        let former = next.quantity.remove(&id).unwrap_or_else(|| {
            tracing::warn!(%id, "removing product that is not in the cart");
            0
        });
        next.items.retain(|item| item.id != id);
        next.cart -= former;
        next.action = Some(CartActionKind::Remove);
        next
    }

    /// Shift the quantity of `id` by `delta`; products not in the cart are
    /// left alone.
    fn adjust(state: &CartState, id: ProductId, delta: i64, kind: CartActionKind) -> CartState {
        if !state.quantity.contains_key(&id) {
            tracing::warn!(%id, action = ?kind, "ignoring quantity change for unknown product");
            return state.clone();
        }
        let mut next = state.clone();
        if let Some(quantity) = next.quantity.get_mut(&id) {
            *quantity += delta;
        }
        next.cart += delta;
        next.action = Some(kind);
        next
    }

    fn apply_discount(&self, state: &CartState, code: &str) -> CartState {
        match self.config.coupon(code) {
            Some(fraction) => CartState {
                discount: Some(Discount {
                    code: code.to_string(),
                    fraction,
                }),
                ..state.clone()
            },
            None => {
                tracing::warn!(code, "ignoring unknown coupon code");
                state.clone()
            }
        }
    }
}

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn initial_state(&self) -> CartState {
        CartState::default()
    }

    fn reduce(&self, state: &CartState, action: &CartAction) -> CartState {
        match action {
            CartAction::Add { product } => Self::add(state, product),
            CartAction::Remove { id } => Self::remove(state, *id),
            CartAction::Increase { id } => Self::adjust(state, *id, 1, CartActionKind::Increase),
            CartAction::Decrease { id } => Self::adjust(state, *id, -1, CartActionKind::Decrease),
            CartAction::Discount { code } => self.apply_discount(state, code),
            CartAction::Seed => state.clone(),
        }
    }
}
