//! In-memory page model.

use super::CartView;
use crate::notice::NoticeBoard;

/// Rendered contents of the cart table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartTable {
    /// Table body markup.
    pub rows: String,
    /// Text of the total element.
    pub total: String,
}

/// A page with any combination of cart surfaces.
///
/// ```rust
/// # use demo_cart::view::{CartView, Page};
/// let product_page = Page::new().with_count_indicator();
/// assert!(product_page.has_count_indicator());
/// assert!(!product_page.has_cart_table());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    count_indicator: Option<String>,
    cart_table: Option<CartTable>,
    notices: NoticeBoard,
}

impl Page {
    /// A page with no cart surfaces and a toast-only notice board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a count indicator.
    #[must_use]
    pub fn with_count_indicator(mut self) -> Self {
        self.count_indicator = Some(String::new());
        self
    }

    /// Add a cart table with its total element.
    #[must_use]
    pub fn with_cart_table(mut self) -> Self {
        self.cart_table = Some(CartTable::default());
        self
    }

    /// Add a dedicated confirmation element for notices.
    #[must_use]
    pub fn with_confirm_surface(mut self) -> Self {
        self.notices = NoticeBoard::with_confirm_surface();
        self
    }

    /// Current count indicator label.
    #[must_use]
    pub fn count_label(&self) -> Option<&str> {
        self.count_indicator.as_deref()
    }

    /// Current table contents.
    #[must_use]
    pub const fn cart_table(&self) -> Option<&CartTable> {
        self.cart_table.as_ref()
    }

    /// The page's notice surfaces.
    #[must_use]
    pub fn notices(&self) -> NoticeBoard {
        self.notices.clone()
    }
}

impl CartView for Page {
    fn has_count_indicator(&self) -> bool {
        self.count_indicator.is_some()
    }

    fn set_count_label(&mut self, label: &str) {
        if let Some(indicator) = self.count_indicator.as_mut() {
            label.clone_into(indicator);
        }
    }

    fn has_cart_table(&self) -> bool {
        self.cart_table.is_some()
    }

    fn set_table_rows(&mut self, rows_html: String) {
        if let Some(table) = self.cart_table.as_mut() {
            table.rows = rows_html;
        }
    }

    fn set_total(&mut self, total: &str) {
        if let Some(table) = self.cart_table.as_mut() {
            total.clone_into(&mut table.total);
        }
    }
}
