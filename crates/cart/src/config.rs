//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CART_STORAGE_KEY` - Storage slot holding the cart (default: cart)
//! - `CART_STORAGE_DIR` - Directory for file-backed storage (default: in-memory)
//! - `CART_COUNT_LABEL` - Count indicator label (default: View Your Cart)
//! - `CART_CURRENCY` - ISO 4217 code used for display (default: USD)
//! - `CART_CONFIRM_DISMISS_MS` - Confirmation surface hide delay (default: 3000)
//! - `CART_TOAST_DISMISS_MS` - Floating toast removal delay (default: 2800)
//! - `CART_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::time::Duration;

use demo_cart_core::CurrencyCode;
use thiserror::Error;

use crate::storage::{AnyStorage, FileStorage, MemoryStorage, StorageError};
use crate::telemetry::LogFormat;

const DEFAULT_STORAGE_KEY: &str = "cart";
const DEFAULT_COUNT_LABEL: &str = "View Your Cart";
const DEFAULT_CONFIRM_DISMISS_MS: u64 = 3000;
const DEFAULT_TOAST_DISMISS_MS: u64 = 2800;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Storage key holding the serialized cart
    pub storage_key: String,
    /// Directory for file-backed storage; `None` keeps the cart in memory
    pub storage_dir: Option<PathBuf>,
    /// Label written on the count indicator
    pub count_label: String,
    /// Currency used when formatting amounts
    pub currency: CurrencyCode,
    /// How long the confirmation surface stays visible
    pub confirm_dismiss: Duration,
    /// How long a floating toast stays on the page
    pub toast_dismiss: Duration,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            count_label: DEFAULT_COUNT_LABEL.to_string(),
            currency: CurrencyCode::default(),
            confirm_dismiss: Duration::from_millis(DEFAULT_CONFIRM_DISMISS_MS),
            toast_dismiss: Duration::from_millis(DEFAULT_TOAST_DISMISS_MS),
            log_format: LogFormat::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_key = lookup("CART_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or(defaults.storage_key);
        let storage_dir = lookup("CART_STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        let count_label = lookup("CART_COUNT_LABEL").unwrap_or(defaults.count_label);

        let currency = match lookup("CART_CURRENCY") {
            Some(value) => value
                .parse::<CurrencyCode>()
                .map_err(|e| invalid("CART_CURRENCY", &e))?,
            None => defaults.currency,
        };
        let confirm_dismiss = get_millis(
            &lookup,
            "CART_CONFIRM_DISMISS_MS",
            defaults.confirm_dismiss,
        )?;
        let toast_dismiss = get_millis(&lookup, "CART_TOAST_DISMISS_MS", defaults.toast_dismiss)?;
        let log_format = match lookup("CART_LOG_FORMAT") {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|e| invalid("CART_LOG_FORMAT", &e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            storage_key,
            storage_dir,
            count_label,
            currency,
            confirm_dismiss,
            toast_dismiss,
            log_format,
        })
    }

    /// Open the configured storage backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage directory cannot be created.
    pub fn open_storage(&self) -> Result<AnyStorage, StorageError> {
        match &self.storage_dir {
            Some(dir) => Ok(AnyStorage::File(FileStorage::open(dir)?)),
            None => Ok(AnyStorage::Memory(MemoryStorage::new())),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, err: &impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

/// Parse a millisecond duration, falling back to `default` when unset.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| invalid(key, &e))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CartConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.confirm_dismiss, Duration::from_millis(3000));
        assert_eq!(config.toast_dismiss, Duration::from_millis(2800));
    }

    #[test]
    fn test_overrides() {
        let config = CartConfig::from_lookup(lookup(&[
            ("CART_STORAGE_KEY", "demo_cart"),
            ("CART_STORAGE_DIR", "/tmp/carts"),
            ("CART_COUNT_LABEL", "Basket"),
            ("CART_CURRENCY", "eur"),
            ("CART_CONFIRM_DISMISS_MS", "1500"),
            ("CART_TOAST_DISMISS_MS", " 500 "),
            ("CART_LOG_FORMAT", "json"),
        ]))
        .expect("config");

        assert_eq!(config.storage_key, "demo_cart");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/carts")));
        assert_eq!(config.count_label, "Basket");
        assert_eq!(config.currency, CurrencyCode::EUR);
        assert_eq!(config.confirm_dismiss, Duration::from_millis(1500));
        assert_eq!(config.toast_dismiss, Duration::from_millis(500));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_storage_key_uses_default() {
        let config =
            CartConfig::from_lookup(lookup(&[("CART_STORAGE_KEY", "  ")])).expect("config");
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn test_invalid_values() {
        let err = CartConfig::from_lookup(lookup(&[("CART_CONFIRM_DISMISS_MS", "soon")]))
            .expect_err("invalid delay");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CART_CONFIRM_DISMISS_MS"));

        let err = CartConfig::from_lookup(lookup(&[("CART_CURRENCY", "DOGE")]))
            .expect_err("invalid currency");
        assert!(err.to_string().contains("CART_CURRENCY"));
    }

    #[test]
    fn test_open_storage_selects_backend() {
        let config = CartConfig::default();
        assert!(matches!(
            config.open_storage().expect("memory"),
            AnyStorage::Memory(_)
        ));

        let dir = tempfile::tempdir().expect("tempdir");
        let config = CartConfig {
            storage_dir: Some(dir.path().to_path_buf()),
            ..CartConfig::default()
        };
        assert!(matches!(
            config.open_storage().expect("file"),
            AnyStorage::File(_)
        ));
    }
}
