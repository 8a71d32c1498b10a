//! Basket Cart - the device-local cart store.
//!
//! This crate owns the authoritative in-process cart state: an ordered
//! collection of line items loaded once from device-local storage at startup
//! and mirrored back on every mutation. Consumers read an immutable snapshot
//! and mutate through [`CartStore`]; storage failures never reach them.
//!
//! # Architecture
//!
//! - [`store`] - [`CartStore`], the cloneable state handle and mutation API
//! - [`storage`] - The [`KeyValueStore`] port plus file and in-memory backends
//! - [`scope`] - Task-scoped ambient access for consumers without a handle
//! - [`config`] - Storage location from environment variables
//!
//! Persistence is fire-and-forget: mutations apply to in-memory state
//! synchronously, and a single background task mirrors the cart into storage
//! in mutation order. In-memory state is the source of truth for the running
//! process; the persisted copy only restores state on the next start.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod scope;
pub mod storage;
pub mod store;

mod writer;

pub use config::{CartConfig, ConfigError};
pub use error::UsageError;
pub use scope::CartScope;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{CartStore, Snapshot};
