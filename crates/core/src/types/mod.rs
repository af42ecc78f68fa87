//! Core types for the demo cart.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod cart;
pub mod line;
pub mod price;

pub use cart::{AddOutcome, Cart, QuantityChange};
pub use line::CartLine;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
