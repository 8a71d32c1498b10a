//! Integration tests for Basket.
//!
//! These tests exercise the cart store against real file storage in
//! temporary directories; no external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart behavior through store and scope
//! - `persistence` - Restart simulation and write ordering over file storage

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tempfile::TempDir;

use basket_cart::{CartStore, FileStore};
use basket_core::{ProductId, ProductInfo};

/// A cart store over a throwaway storage directory.
///
/// [`TestCart::reopen`] simulates a process restart: a brand-new store over
/// the same directory, warm-started from whatever the previous store
/// persisted.
pub struct TestCart {
    dir: TempDir,
    pub store: CartStore,
}

impl TestCart {
    /// Open a store over a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub async fn open() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = CartStore::open(Arc::new(FileStore::new(dir.path()))).await;
        Self { dir, store }
    }

    /// Simulate a process restart over the same storage directory.
    pub async fn reopen(&mut self) {
        self.store = CartStore::open(Arc::new(FileStore::new(self.dir.path()))).await;
    }

    /// Path of the storage directory backing this cart.
    #[must_use]
    pub fn storage_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// Test product descriptor with a derived image URL.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal.
#[must_use]
pub fn product(id: &str, title: &str, price: &str) -> ProductInfo {
    ProductInfo {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: price.parse().expect("valid decimal price"),
    }
}
