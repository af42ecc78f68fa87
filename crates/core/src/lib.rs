//! Demo Cart Core - Shared types library.
//!
//! This crate provides the cart data model used by the `demo-cart` widget:
//! prices, line items, and the cart collection with its state transitions.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! storage access, no rendering. Loading and persisting a [`Cart`] is the job
//! of the `demo-cart` crate.
//!
//! # Modules
//!
//! - [`types`] - Prices, currency codes, cart lines and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
