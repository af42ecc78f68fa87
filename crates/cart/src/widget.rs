//! Cart widget: wires user events to the store, the view and notices.
//!
//! Each event handler runs to completion: mutate the stored cart, then
//! refresh whichever surfaces the page has. Handlers never return errors;
//! failures are logged and, where the user caused them, shown as a notice.

use demo_cart_core::{CurrencyCode, Price};
use tracing::{debug, error, info, instrument, warn};

use crate::config::CartConfig;
use crate::error::CartError;
use crate::notice::Notifier;
use crate::storage::Storage;
use crate::store::{CartStore, CheckoutOutcome};
use crate::view::{CartView, render};

/// Notice shown when checking out an empty cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty.";
/// Notice shown after a (demo) order is placed.
pub const ORDER_PLACED_NOTICE: &str = "Thank you, your order has been placed (demo).";
/// Notice shown when an item cannot be added.
pub const ADD_REJECTED_NOTICE: &str = "Sorry, that item could not be added to your cart.";
/// Notice shown when the cart cannot be saved.
pub const STORAGE_FAILED_NOTICE: &str = "Sorry, your cart could not be updated.";

/// The cart as seen by one page.
#[derive(Debug)]
pub struct CartWidget<S, V> {
    store: CartStore<S>,
    view: V,
    notifier: Notifier,
    count_label: String,
    currency: CurrencyCode,
}

impl<S: Storage, V: CartView> CartWidget<S, V> {
    /// Create a widget for one page.
    pub fn new(config: &CartConfig, storage: S, view: V, notifier: Notifier) -> Self {
        Self {
            store: CartStore::new(storage, config.storage_key.clone()),
            view,
            notifier,
            count_label: config.count_label.clone(),
            currency: config.currency,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Page-load hook: refresh the count, and the table if the page has one.
    #[instrument(skip(self))]
    pub fn on_ready(&mut self) {
        self.refresh_count();
        if self.view.has_cart_table() {
            self.render_table();
        }
    }

    /// Add `quantity` units of `(name, price)` and refresh the count.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, name: &str, price: Price, quantity: u32) {
        match self.store.add_item(name, price, quantity) {
            Ok(outcome) => {
                debug!(?outcome, "Item added");
                self.refresh_count();
            }
            Err(e) => self.report(&e),
        }
    }

    /// Shift the quantity of line `index` by `delta` and refresh every surface.
    #[instrument(skip(self))]
    pub fn change_quantity(&mut self, index: usize, delta: i64) {
        match self.store.change_quantity(index, delta) {
            Ok(Some(change)) => {
                debug!(?change, "Quantity changed");
                self.refresh_all();
            }
            Ok(None) => debug!("No line at index; ignoring"),
            Err(e) => self.report(&e),
        }
    }

    /// Remove line `index` and refresh every surface.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, index: usize) {
        match self.store.remove_item(index) {
            Ok(line) => {
                debug!(name = %line.name, "Line removed");
                self.refresh_all();
            }
            Err(e) => self.report(&e),
        }
    }

    /// Place the demo order: clear the cart and confirm, or report an empty cart.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) {
        match self.store.checkout() {
            Ok(CheckoutOutcome::Empty) => {
                self.notifier.notify(EMPTY_CART_NOTICE);
            }
            Ok(CheckoutOutcome::Placed { item_count, total }) => {
                info!(item_count, total = %total, "Demo order placed");
                self.refresh_all();
                self.notifier.notify(ORDER_PLACED_NOTICE);
            }
            Err(e) => self.report(&e),
        }
    }

    /// Show an arbitrary notice.
    pub fn notify(&mut self, message: &str) {
        self.notifier.notify(message);
    }

    /// Write the summed quantity onto the count indicator, if present.
    pub fn refresh_count(&mut self) {
        if !self.view.has_count_indicator() {
            return;
        }
        let label = render::count_label(&self.count_label, self.store.item_count());
        self.view.set_count_label(&label);
    }

    /// Rebuild the cart table and total, if present.
    pub fn render_table(&mut self) {
        if !self.view.has_cart_table() {
            return;
        }
        let cart = self.store.cart();
        match render::render_rows(&cart, self.currency) {
            Ok(rows) => {
                self.view.set_table_rows(rows);
                self.view
                    .set_total(&render::total_text(&cart, self.currency));
            }
            Err(e) => error!(error = %e, "Failed to render cart table"),
        }
    }

    /// Refresh table, total and count.
    pub fn refresh_all(&mut self) {
        self.render_table();
        self.refresh_count();
    }

    fn report(&mut self, err: &CartError) {
        match err {
            CartError::LineNotFound(_) => debug!(error = %err, "Ignoring stale line index"),
            CartError::InvalidQuantity(_) | CartError::InvalidPrice(_) => {
                warn!(error = %err, "Rejected cart input");
                self.notifier.notify(ADD_REJECTED_NOTICE);
            }
            CartError::Storage(_) | CartError::Encode(_) => {
                error!(error = %err, "Failed to persist cart");
                self.notifier.notify(STORAGE_FAILED_NOTICE);
            }
        }
    }
}
