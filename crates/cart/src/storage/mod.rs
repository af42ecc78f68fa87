//! Key-value storage port for the persisted cart.
//!
//! The cart lives as a single JSON blob under one string key, the same way the
//! browser widget keeps it in local storage. Everything above this module
//! talks to a [`Storage`] implementation instead of a global.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - shared in-process map, used for headless pages and tests
//! - [`FileStorage`] - one JSON file per key in a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// String-keyed blob storage.
///
/// Methods take `&self`: handles to the same backing store may be held by
/// several pages at once, and the last writer wins.
pub trait Storage {
    /// Read the blob under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empty the slot under `key`. Removing a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage backend selected from configuration.
#[derive(Debug, Clone)]
pub enum AnyStorage {
    Memory(MemoryStorage),
    File(FileStorage),
}

impl Storage for AnyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(storage) => storage.get(key),
            Self::File(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(storage) => storage.set(key, value),
            Self::File(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(storage) => storage.remove(key),
            Self::File(storage) => storage.remove(key),
        }
    }
}
