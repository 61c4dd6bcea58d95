//! Pricing configuration: tax, shipping and the coupon table.

use super::error::CartError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_TAX_RATE: f64 = 0.05;
const DEFAULT_SHIPPING_FEE: f64 = 15.0;

/// Pricing rules used by the cart reducer and the totals calculation.
///
/// Fields missing from a JSON document fall back to the defaults.
///
/// # Example
///
/// ```rust
/// use pureform::cart::CartConfig;
///
/// let config = CartConfig::from_json(r#"{ "shipping_fee": 0 }"#).unwrap();
/// assert_eq!(config.shipping_fee, 0.0);
/// assert_eq!(config.tax_rate, 0.05);
/// assert_eq!(config.coupon("BIGSALE"), Some(0.5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Tax as a fraction of the subtotal
    pub tax_rate: f64,
    /// Flat shipping fee added to every order
    pub shipping_fee: f64,
    /// Coupon code -> fractional price reduction
    pub coupons: BTreeMap<String, f64>,
}

impl Default for CartConfig {
    fn default() -> Self {
        let coupons = [("20OFF", 0.2), ("BIGSALE", 0.5), ("FLASHSLAE", 0.05)]
            .into_iter()
            .map(|(code, fraction)| (code.to_string(), fraction))
            .collect();
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            shipping_fee: DEFAULT_SHIPPING_FEE,
            coupons,
        }
    }
}

impl CartConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check rates, fees and coupon fractions are in range.
    pub fn validate(&self) -> Result<(), CartError> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(CartError::InvalidConfig(format!(
                "tax_rate {} is outside [0, 1]",
                self.tax_rate
            )));
        }
        if !(self.shipping_fee >= 0.0 && self.shipping_fee.is_finite()) {
            return Err(CartError::InvalidConfig(format!(
                "shipping_fee {} must be a non-negative amount",
                self.shipping_fee
            )));
        }
        if let Some((code, fraction)) = self
            .coupons
            .iter()
            .find(|(_, fraction)| !(**fraction > 0.0 && **fraction <= 1.0))
        {
            return Err(CartError::InvalidConfig(format!(
                "coupon {code} has fraction {fraction} outside (0, 1]"
            )));
        }
        Ok(())
    }

    /// Fraction for a coupon code, if the code exists.
    ///
    /// Callers use this to reject unknown codes before dispatching.
    pub fn coupon(&self, code: &str) -> Option<f64> {
        self.coupons.get(code).copied()
    }
}
