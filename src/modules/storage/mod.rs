//! Key-value storage for client-side style persistence
//!
//! A small string-to-string store with explicit `get`/`set` operations.
//! The location list is serialized into a single key of this store.

mod file_store;
mod memory_store;

use async_trait::async_trait;
use thiserror::Error;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to encode stored value: {0}")]
    Encode(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

/// String key-value store. A `set` always replaces the whole value of a key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any prior value
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
