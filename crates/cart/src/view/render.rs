//! Markup and label rendering for cart surfaces.
//!
//! Row markup is produced by an Askama template; its HTML escaper handles
//! `&`, `<`, `>`, `"` and `'` in every interpolated value, which keeps line
//! names from injecting markup.

use askama::Template;
use demo_cart_core::{Cart, CurrencyCode};

use crate::error::RenderError;

/// One table row, with amounts already formatted.
#[derive(Debug, Clone)]
pub struct CartRowView {
    pub index: usize,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Cart table body template.
#[derive(Template)]
#[template(path = "cart/rows.html")]
pub struct CartRowsTemplate {
    pub rows: Vec<CartRowView>,
}

impl CartRowsTemplate {
    /// Build the row views for `cart`.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: CurrencyCode) -> Self {
        let rows = cart
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| CartRowView {
                index,
                name: line.name.clone(),
                price: line.price.display(currency),
                quantity: line.quantity,
                subtotal: line.subtotal().display(currency),
            })
            .collect();
        Self { rows }
    }
}

/// Render the table body markup for `cart`.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_rows(cart: &Cart, currency: CurrencyCode) -> Result<String, RenderError> {
    Ok(CartRowsTemplate::from_cart(cart, currency).render()?)
}

/// Text for the total element (e.g., "Total: $29.97").
#[must_use]
pub fn total_text(cart: &Cart, currency: CurrencyCode) -> String {
    format!("Total: {}", cart.total().display(currency))
}

/// Count indicator label: bare at zero, "label (N)" otherwise.
#[must_use]
pub fn count_label(label: &str, count: u64) -> String {
    if count == 0 {
        label.to_string()
    } else {
        format!("{label} ({count})")
    }
}
