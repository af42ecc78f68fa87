//! Loading and persisting the cart blob.
//!
//! The blob is a JSON array of `{"name", "price", "quantity"}` objects, as
//! written by the browser widget. Whole-number prices are written as
//! integers (`20`) and others as the shortest float that reads back (`9.99`).

use demo_cart_core::{Cart, CartLine};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::Storage;

/// Reads and writes the whole [`Cart`] under one storage key.
#[derive(Debug, Clone)]
pub struct CartRepository<S> {
    storage: S,
    key: String,
}

impl<S: Storage> CartRepository<S> {
    /// Create a repository over `storage`, persisting under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key holding the cart.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage handle.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the cart.
    ///
    /// A missing slot, an unreadable backend, or a blob that is not a JSON
    /// array all yield an empty cart. Entries of the array that are not valid
    /// lines (e.g., a `null` price) are skipped and the rest are kept.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored cart");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored cart");
                return Cart::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding malformed stored cart");
                return Cart::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                serde_json::from_value::<CartLine>(entry)
                    .inspect_err(|e| {
                        warn!(
                            key = %self.key,
                            position,
                            error = %e,
                            "Skipping malformed cart line"
                        );
                    })
                    .ok()
            })
            .collect()
    }

    /// Persist the whole cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if encoding or the storage write fails.
    pub fn save(&self, cart: &Cart) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    /// Empty the storage slot.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the storage write fails.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}
