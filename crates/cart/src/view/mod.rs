//! Projection of the cart onto page surfaces.
//!
//! The same cart is shown on several pages with different surfaces: product
//! pages only carry a count indicator, the cart page carries the table too.
//! A [`CartView`] reports which surfaces it has, and callers check before
//! writing to them.
//!
//! # Implementations
//!
//! - [`Page`] - in-memory page model holding the rendered surfaces
//! - [`NullView`] - no surfaces at all, for headless use

mod page;
pub mod render;

pub use page::{CartTable, Page};

/// Surfaces a page may offer for displaying the cart.
pub trait CartView {
    /// Whether the page has a count indicator.
    fn has_count_indicator(&self) -> bool;

    /// Replace the count indicator's label.
    fn set_count_label(&mut self, label: &str);

    /// Whether the page has a cart table (body and total element).
    fn has_cart_table(&self) -> bool;

    /// Replace the table body with pre-escaped row markup.
    fn set_table_rows(&mut self, rows_html: String);

    /// Replace the text of the total element.
    fn set_total(&mut self, total: &str);
}

/// A view with no surfaces. Every write is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl CartView for NullView {
    fn has_count_indicator(&self) -> bool {
        false
    }

    fn set_count_label(&mut self, _label: &str) {}

    fn has_cart_table(&self) -> bool {
        false
    }

    fn set_table_rows(&mut self, _rows_html: String) {}

    fn set_total(&mut self, _total: &str) {}
}
