//! Cart state mutations.
//!
//! Every operation is a full read-modify-write against storage: load the
//! cart, apply one transition, write the whole cart back. Nothing is cached
//! between calls, so two stores over the same storage see each other's
//! writes (and silently overwrite each other; last writer wins).

use demo_cart_core::{AddOutcome, Cart, CartLine, Price, QuantityChange};

use crate::error::{CartError, Result};
use crate::repository::CartRepository;
use crate::storage::Storage;

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing changed.
    Empty,
    /// The cart was cleared. No order record is kept anywhere.
    Placed { item_count: u64, total: Price },
}

/// Authoritative cart operations over a [`CartRepository`].
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    repo: CartRepository<S>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store persisting under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            repo: CartRepository::new(storage, key),
        }
    }

    /// The repository backing this store.
    #[must_use]
    pub const fn repository(&self) -> &CartRepository<S> {
        &self.repo
    }

    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.repo.load()
    }

    /// Add `quantity` units of `(name, price)`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` for a zero quantity,
    /// `CartError::InvalidPrice` for a negative price, a price that would not
    /// read back from storage unchanged, or one that would overflow the cart
    /// total. Rejected adds write nothing. Otherwise a storage error.
    pub fn add_item(&self, name: &str, price: Price, quantity: u32) -> Result<AddOutcome> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if price.is_negative() || !price.survives_storage() {
            return Err(CartError::InvalidPrice(price));
        }

        let mut cart = self.repo.load();
        let outcome = cart.add(name, price, quantity);
        if cart.checked_total().is_none() {
            return Err(CartError::InvalidPrice(price));
        }
        self.repo.save(&cart)?;
        Ok(outcome)
    }

    /// Shift the quantity of line `index` by `delta`; a line reaching zero is removed.
    ///
    /// Returns `Ok(None)` without writing when there is no line at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the storage write fails.
    pub fn change_quantity(&self, index: usize, delta: i64) -> Result<Option<QuantityChange>> {
        let mut cart = self.repo.load();
        let Some(change) = cart.change_quantity(index, delta) else {
            return Ok(None);
        };
        self.repo.save(&cart)?;
        Ok(Some(change))
    }

    /// Remove line `index`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if there is no line at `index`, or a
    /// storage error.
    pub fn remove_item(&self, index: usize) -> Result<CartLine> {
        let mut cart = self.repo.load();
        let line = cart.remove(index).ok_or(CartError::LineNotFound(index))?;
        self.repo.save(&cart)?;
        Ok(line)
    }

    /// Clear the cart, unless it is already empty.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the storage write fails.
    pub fn checkout(&self) -> Result<CheckoutOutcome> {
        let cart = self.repo.load();
        if cart.is_empty() {
            return Ok(CheckoutOutcome::Empty);
        }
        self.repo.clear()?;
        Ok(CheckoutOutcome::Placed {
            item_count: cart.item_count(),
            total: cart.total(),
        })
    }

    /// Sum of `price * quantity` over the stored cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.repo.load().total()
    }

    /// Total units in the stored cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.repo.load().item_count()
    }
}
