//! Persistent key/value storage for the cart payload.
//!
//! The cart store consumes storage through the [`KeyValueStore`] port: two
//! asynchronous operations over string keys and string payloads. Backends
//! must return `Ok(None)` for absent keys and treat `set` as a full
//! overwrite of the previous value.

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys for persisted payloads.
pub mod keys {
    /// Key under which the serialized cart payload is stored.
    pub const CART: &str = "basket:cart";
}

/// Errors from a persistent key/value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Device-local key/value storage surviving process restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. An absent key
    /// is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
