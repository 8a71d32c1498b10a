//! Cart commands.
//!
//! Each command opens the persisted cart from the configured storage
//! directory, applies its operation, flushes the pending write, and prints
//! the resulting cart. The store itself treats unknown ids as silent no-ops;
//! the CLI surfaces a notice so operators are not left guessing.

use std::sync::Arc;

use thiserror::Error;

use basket_cart::{CartConfig, CartStore, ConfigError, FileStore};
use basket_core::{Price, ProductId, ProductInfo};

/// Errors that can occur while running cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Open the cart store over the configured storage directory.
async fn open_store() -> Result<CartStore, CartCommandError> {
    let config = CartConfig::from_env()?;
    tracing::debug!("Using storage directory: {}", config.storage_dir.display());

    Ok(CartStore::open(Arc::new(FileStore::new(config.storage_dir))).await)
}

/// Print the cart, one line item per line.
fn report(store: &CartStore) {
    let products = store.products();

    if products.is_empty() {
        tracing::info!("Cart is empty");
        return;
    }

    tracing::info!("Cart ({} line item(s)):", products.len());
    for item in &*products {
        tracing::info!(
            "  {} x{} @ {} [{}]",
            item.title,
            item.quantity,
            item.price,
            item.id
        );
    }
}

/// Warn when `id` matches nothing; the store stays silent by contract.
fn notice_if_absent(store: &CartStore, id: &ProductId) {
    if !store.products().iter().any(|item| &item.id == id) {
        tracing::warn!("No line item with id '{id}' in the cart; nothing to do");
    }
}

/// Show the current cart.
///
/// # Errors
///
/// Returns `CartCommandError` if configuration cannot be loaded.
pub async fn show() -> Result<(), CartCommandError> {
    let store = open_store().await?;
    report(&store);
    Ok(())
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns `CartCommandError` if configuration cannot be loaded.
pub async fn add(
    id: &str,
    title: &str,
    image_url: &str,
    price: Price,
) -> Result<(), CartCommandError> {
    let store = open_store().await?;

    store.add_to_cart(ProductInfo {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: image_url.to_owned(),
        price,
    });
    store.flush().await;

    report(&store);
    Ok(())
}

/// Increase a line item's quantity by one.
///
/// # Errors
///
/// Returns `CartCommandError` if configuration cannot be loaded.
pub async fn increment(id: &str) -> Result<(), CartCommandError> {
    let store = open_store().await?;
    let id = ProductId::new(id);

    notice_if_absent(&store, &id);
    store.increment(&id);
    store.flush().await;

    report(&store);
    Ok(())
}

/// Decrease a line item's quantity by one, removing it at zero.
///
/// # Errors
///
/// Returns `CartCommandError` if configuration cannot be loaded.
pub async fn decrement(id: &str) -> Result<(), CartCommandError> {
    let store = open_store().await?;
    let id = ProductId::new(id);

    notice_if_absent(&store, &id);
    store.decrement(&id);
    store.flush().await;

    report(&store);
    Ok(())
}
