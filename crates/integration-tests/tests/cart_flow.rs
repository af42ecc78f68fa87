//! End-to-end cart flows: product page adds, cart page edits and checks out.

use std::time::Duration;

use demo_cart::widget::{EMPTY_CART_NOTICE, ORDER_PLACED_NOTICE};
use demo_cart::{CartConfig, CartLine, MemoryStorage, Price};
use demo_cart_integration_tests::{cart_page, open_page, product_page};
use pretty_assertions::assert_eq;

#[test]
fn test_product_page_then_cart_page() {
    let config = CartConfig::default();
    let storage = MemoryStorage::new();

    let mut product = open_page(&config, storage.clone(), product_page());
    assert_eq!(product.view().count_label(), Some("View Your Cart"));
    product.add_item("Mug", Price::from_cents(999), 1);
    product.add_item("Mug", Price::from_cents(999), 2);
    product.add_item("T-Shirt - Red, L", Price::from_cents(2000), 1);
    assert_eq!(product.view().count_label(), Some("View Your Cart (4)"));

    let cart = open_page(&config, storage, cart_page());
    let table = cart.view().cart_table().expect("cart table");
    assert_eq!(table.total, "Total: $49.97");
    assert_eq!(table.rows.matches("<tr>").count(), 2);
    assert!(table.rows.contains("<td>$29.97</td>"));
    assert_eq!(cart.view().count_label(), Some("View Your Cart (4)"));
}

#[test]
fn test_remove_first_line_keeps_order() {
    let config = CartConfig::default();
    let storage = MemoryStorage::new();
    let mut cart = open_page(&config, storage, cart_page());
    cart.add_item("Shirt", Price::from_cents(2000), 1);
    cart.add_item("Hat", Price::from_cents(1500), 1);

    cart.remove_item(0);

    assert_eq!(
        cart.store().cart().lines(),
        &[CartLine::new("Hat", Price::from_cents(1500), 1)]
    );
    let table = cart.view().cart_table().expect("cart table");
    assert_eq!(table.total, "Total: $15.00");
    assert!(table.rows.contains(r#"data-action="remove" data-index="0""#));
    assert!(!table.rows.contains(r#"data-index="1""#));
}

#[test]
fn test_increment_and_decrement_controls() {
    let config = CartConfig::default();
    let mut cart = open_page(&config, MemoryStorage::new(), cart_page());
    cart.add_item("Mug", Price::from_cents(999), 1);

    cart.change_quantity(0, 1);
    cart.change_quantity(0, 1);
    assert_eq!(cart.view().count_label(), Some("View Your Cart (3)"));

    cart.change_quantity(0, -1);
    cart.change_quantity(0, -1);
    cart.change_quantity(0, -1);
    assert!(cart.store().cart().is_empty());
    assert_eq!(cart.view().count_label(), Some("View Your Cart"));

    // Further clicks on a vanished row do nothing.
    cart.change_quantity(0, -1);
    assert!(cart.store().cart().is_empty());
}

#[test]
fn test_escaped_names_in_table() {
    let config = CartConfig::default();
    let mut cart = open_page(&config, MemoryStorage::new(), cart_page());
    cart.add_item("<b>X</b>", Price::from_cents(100), 1);
    cart.render_table();

    let table = cart.view().cart_table().expect("cart table");
    assert!(table.rows.contains("&lt;b&gt;X&lt;/b&gt;"));
    assert!(!table.rows.contains("<b>X</b>"));
}

#[test]
fn test_pages_share_storage() {
    let config = CartConfig::default();
    let storage = MemoryStorage::new();
    let mut first = open_page(&config, storage.clone(), cart_page());
    let mut second = open_page(&config, storage, cart_page());

    first.add_item("Mug", Price::from_cents(999), 1);
    second.add_item("Hat", Price::from_cents(1500), 1);

    // Every action reloads before writing, so neither page drops the other's line.
    assert_eq!(first.store().cart().len(), 2);
    first.remove_item(0);
    assert_eq!(
        second.store().cart().lines(),
        &[CartLine::new("Hat", Price::from_cents(1500), 1)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_checkout_notices_on_confirm_surface() {
    let config = CartConfig::default();
    let storage = MemoryStorage::new();
    let mut product = open_page(&config, storage, product_page());

    product.checkout();
    let board = product.notifier().board().clone();
    assert_eq!(board.visible_message().as_deref(), Some(EMPTY_CART_NOTICE));

    product.add_item("Mug", Price::from_cents(999), 1);
    tokio::time::advance(Duration::from_millis(2500)).await;
    product.checkout();
    assert_eq!(board.visible_message().as_deref(), Some(ORDER_PLACED_NOTICE));
    assert!(product.store().cart().is_empty());

    // The empty-cart notice's timer was cancelled; only the new one counts.
    tokio::time::advance(Duration::from_millis(1000)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(board.visible_message().as_deref(), Some(ORDER_PLACED_NOTICE));

    tokio::time::advance(config.confirm_dismiss).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(board.visible_message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_checkout_toast_on_cart_page() {
    let config = CartConfig::default();
    let mut cart = open_page(&config, MemoryStorage::new(), cart_page());
    cart.add_item("Mug", Price::from_cents(999), 2);
    cart.checkout();

    let board = cart.notifier().board().clone();
    assert_eq!(
        board.toast().map(|toast| toast.text),
        Some(ORDER_PLACED_NOTICE.to_string())
    );
    assert_eq!(
        cart.view().cart_table().map(|table| table.total.as_str()),
        Some("Total: $0.00")
    );

    tokio::time::advance(config.toast_dismiss + Duration::from_millis(1)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(board.toast(), None);
}
