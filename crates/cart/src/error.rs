//! Error types for cart operations.
//!
//! The store returns `CartError` so callers can tell a rejected input from a
//! broken backend. The widget never lets these escape: it logs them and, for
//! rejected input, shows a notice instead.

use demo_cart_core::Price;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by `CartStore` operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// No line exists at the given index.
    #[error("Line not found at index {0}")]
    LineNotFound(usize),

    /// Quantity must be at least one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Price must not be negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Price),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be encoded for storage.
    #[error("Failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CartError {
    /// Whether the error was caused by the caller's input rather than the backend.
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        matches!(self, Self::InvalidQuantity(_) | Self::InvalidPrice(_))
    }
}

/// Errors raised while rendering cart markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
