//! A single line item in the cart.

use serde::{Deserialize, Deserializer, Serialize};

use super::price::Price;

/// One row of the cart, keyed by `(name, price)`.
///
/// The name is expected to already encode any selected variant
/// (e.g., "T-Shirt - Red, L"), so two variants are two distinct lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Display name including the variant.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units. Lines written without a quantity (or with `null`)
    /// read back as zero; negative counts read as zero and fractional ones
    /// are truncated.
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// Create a new line.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Whether this line is the one identified by `(name, price)`.
    #[must_use]
    pub fn matches(&self, name: &str, price: Price) -> bool {
        self.name == name && self.price == price
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Unit price times quantity, or `None` on overflow.
    #[must_use]
    pub fn checked_subtotal(&self) -> Option<Price> {
        self.price.checked_times(self.quantity)
    }
}

// Float-to-int `as` saturates and maps NaN to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let quantity = Option::<f64>::deserialize(deserializer)?;
    Ok(quantity.map_or(0, |quantity| quantity as u32))
}
