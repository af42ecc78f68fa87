//! Demo Cart - client-side shopping cart for the demo storefront.
//!
//! The cart is a single JSON blob in key-value storage. Every user action is
//! a read-modify-write of that blob followed by a refresh of whatever cart
//! surfaces the current page has.
//!
//! # Architecture
//!
//! - [`storage`] - Storage port and its in-memory / file backends
//! - [`repository`] - Loads and saves the cart blob
//! - [`store`] - Cart mutations (add, change quantity, remove, checkout)
//! - [`view`] - Page surfaces and markup rendering
//! - [`notice`] - Transient notices with cancellable dismissal
//! - [`widget`] - Event handlers tying the above together
//!
//! # Example
//!
//! ```rust
//! use demo_cart::{CartConfig, CartWidget, MemoryStorage, Notifier, Page, Price};
//!
//! let config = CartConfig::default();
//! let page = Page::new().with_count_indicator().with_cart_table();
//! let notifier = Notifier::new(page.notices(), &config);
//! let mut widget = CartWidget::new(&config, MemoryStorage::new(), page, notifier);
//!
//! widget.on_ready();
//! widget.add_item("Mug", Price::from_cents(999), 1);
//! widget.add_item("Mug", Price::from_cents(999), 2);
//! widget.refresh_all();
//!
//! let table = widget.view().cart_table().expect("cart page has a table");
//! assert_eq!(table.total, "Total: $29.97");
//! assert_eq!(widget.view().count_label(), Some("View Your Cart (3)"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod notice;
pub mod repository;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod view;
pub mod widget;

pub use config::{CartConfig, ConfigError};
pub use demo_cart_core::{AddOutcome, Cart, CartLine, CurrencyCode, Price, QuantityChange};
pub use error::{CartError, RenderError};
pub use notice::{NoticeBoard, NoticeSurface, Notifier};
pub use repository::CartRepository;
pub use storage::{AnyStorage, FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CartStore, CheckoutOutcome};
pub use telemetry::{LogFormat, init_tracing};
pub use view::{CartTable, CartView, NullView, Page};
pub use widget::CartWidget;
