//! The cart collection and its state transitions.
//!
//! A [`Cart`] is an insertion-ordered list of [`CartLine`]s. Two invariants
//! hold after every transition:
//!
//! - no two lines share both name and price (additions merge instead)
//! - a line whose quantity drops to zero is removed, never kept at zero

use serde::{Deserialize, Serialize};

use super::line::CartLine;
use super::price::Price;

/// Ordered collection of line items. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Result of adding an item to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Quantity was added to an existing line.
    Merged { index: usize, quantity: u32 },
    /// A new line was appended.
    Appended { index: usize },
}

/// Result of changing a line's quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds `quantity` units.
    Updated { quantity: u32 },
    /// The quantity reached zero and the line was dropped.
    Removed(CartLine),
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Add `quantity` units of `(name, price)`, merging into an existing line.
    pub fn add(&mut self, name: &str, price: Price, quantity: u32) -> AddOutcome {
        if let Some((index, line)) = self
            .lines
            .iter_mut()
            .enumerate()
            .find(|(_, line)| line.matches(name, price))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return AddOutcome::Merged {
                index,
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine::new(name, price, quantity));
        AddOutcome::Appended {
            index: self.lines.len() - 1,
        }
    }

    /// Shift the quantity of the line at `index` by `delta`, clamping at zero.
    ///
    /// Returns `None` when there is no line at `index`.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Option<QuantityChange> {
        let line = self.lines.get_mut(index)?;
        let next = i64::from(line.quantity)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);

        if line.quantity == 0 {
            return Some(QuantityChange::Removed(self.lines.remove(index)));
        }
        Some(QuantityChange::Updated {
            quantity: line.quantity,
        })
    }

    /// Remove and return the line at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines, saturating at the decimal
    /// bounds.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of `price * quantity` over all lines, or `None` if any subtotal or
    /// the running sum overflows.
    #[must_use]
    pub fn checked_total(&self) -> Option<Price> {
        self.lines.iter().try_fold(Price::ZERO, |total, line| {
            total.checked_add(line.checked_subtotal()?)
        })
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn shirt_and_hat() -> Cart {
        [
            CartLine::new("Shirt", Price::from_cents(2000), 1),
            CartLine::new("Hat", Price::from_cents(1500), 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add("Mug", Price::from_cents(999), 1),
            AddOutcome::Appended { index: 0 }
        );
        assert_eq!(
            cart.add("Mug", Price::from_cents(999), 2),
            AddOutcome::Merged {
                index: 0,
                quantity: 3
            }
        );
        assert_eq!(
            cart.lines(),
            &[CartLine::new("Mug", Price::from_cents(999), 3)]
        );
        assert_eq!(cart.total().display(crate::CurrencyCode::USD), "$29.97");
    }

    #[test]
    fn test_add_same_name_different_price_appends() {
        let mut cart = Cart::new();
        cart.add("Mug", Price::from_cents(999), 1);
        cart.add("Mug", Price::from_cents(1299), 1);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_new_item_leaves_prior_lines() {
        let mut cart = shirt_and_hat();
        let before = cart.lines().to_vec();
        cart.add("Socks", Price::from_cents(500), 2);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.lines().get(..2), Some(before.as_slice()));
        assert_eq!(
            cart.get(2),
            Some(&CartLine::new("Socks", Price::from_cents(500), 2))
        );
    }

    #[test]
    fn test_change_quantity_increments() {
        let mut cart = shirt_and_hat();
        assert_eq!(
            cart.change_quantity(1, 1),
            Some(QuantityChange::Updated { quantity: 2 })
        );
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut cart = shirt_and_hat();
        cart.change_quantity(0, 2);
        let change = cart.change_quantity(0, -5);
        assert!(matches!(change, Some(QuantityChange::Removed(ref line)) if line.name == "Shirt"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).map(|line| line.name.as_str()), Some("Hat"));
    }

    #[test]
    fn test_change_quantity_out_of_range() {
        let mut cart = shirt_and_hat();
        assert_eq!(cart.change_quantity(5, -1), None);
        assert_eq!(cart, shirt_and_hat());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = shirt_and_hat();
        cart.add("Socks", Price::from_cents(500), 1);
        let removed = cart.remove(1);
        assert_eq!(removed.map(|line| line.name), Some("Hat".to_string()));
        let names: Vec<_> = cart.lines().iter().map(|line| line.name.as_str()).collect();
        assert_eq!(names, ["Shirt", "Socks"]);
    }

    #[test]
    fn test_remove_first_line() {
        let mut cart = shirt_and_hat();
        cart.remove(0);
        assert_eq!(
            cart.lines(),
            &[CartLine::new("Hat", Price::from_cents(1500), 1)]
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = shirt_and_hat();
        assert_eq!(cart.remove(2), None);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_totals() {
        let mut cart = shirt_and_hat();
        cart.change_quantity(1, 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Price::from_cents(6500));
        assert_eq!(Cart::new().total(), Price::ZERO);
    }

    #[test]
    fn test_checked_total_detects_overflow() {
        let mut cart = shirt_and_hat();
        assert_eq!(cart.checked_total(), Some(Price::from_cents(3500)));
        let huge = Price::new(rust_decimal::Decimal::from_scientific("5e28").expect("valid"));
        cart.add("Gold", huge, 2);
        assert_eq!(cart.checked_total(), None);
        assert_eq!(cart.total(), Price::new(rust_decimal::Decimal::MAX));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&shirt_and_hat()).expect("serialize");
        assert_eq!(
            json,
            r#"[{"name":"Shirt","price":20,"quantity":1},{"name":"Hat","price":15,"quantity":1}]"#
        );
        let cart: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cart, shirt_and_hat());
    }
}
