//! Integration tests for the demo cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end widget flows across pages sharing one storage
//! - `persistence` - File-backed storage and blobs written by the browser widget
//!
//! This crate only hosts shared helpers for the tests under `tests/`.

use demo_cart::{CartConfig, CartWidget, Notifier, Page, Storage};

/// A product listing page: count indicator and a confirmation element.
#[must_use]
pub fn product_page() -> Page {
    Page::new().with_count_indicator().with_confirm_surface()
}

/// The cart page: count indicator and cart table, notices as toasts.
#[must_use]
pub fn cart_page() -> Page {
    Page::new().with_count_indicator().with_cart_table()
}

/// Open `page` against `storage` and fire the page-load hook.
pub fn open_page<S: Storage>(config: &CartConfig, storage: S, page: Page) -> CartWidget<S, Page> {
    let notifier = Notifier::new(page.notices(), config);
    let mut widget = CartWidget::new(config, storage, page, notifier);
    widget.on_ready();
    widget
}
