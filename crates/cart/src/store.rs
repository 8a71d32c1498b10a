//! The cart store: authoritative in-process cart state.
//!
//! Mutations apply to in-memory state synchronously and mirror the full
//! serialized cart into the persistent store in the background. In-memory
//! state never waits on I/O and is the source of truth for the running
//! process; the persisted copy only restores state on the next start.

use std::sync::{Arc, PoisonError, RwLock};

use basket_core::{Cart, LineItem, ProductId, ProductInfo};

use crate::storage::{KeyValueStore, keys};
use crate::writer::PersistWriter;

/// Read-only view of the cart at a point in time.
///
/// Replaced wholesale on every change, so consumers can detect changes with
/// pointer equality (`Arc::ptr_eq`). A no-op mutation keeps the previous
/// snapshot, identity included.
pub type Snapshot = Arc<[LineItem]>;

/// Cheaply cloneable handle to the cart state.
///
/// All clones share the same state. The handle is `Send + Sync`, but the
/// design assumes a single logical writer: one user, one device, one task
/// mutating at a time.
#[derive(Clone, Debug)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

#[derive(Debug)]
struct CartStoreInner {
    products: RwLock<Snapshot>,
    writer: PersistWriter,
}

impl CartStore {
    /// Open the store, warm-starting from the persisted payload.
    ///
    /// This is the one-time load step: an absent payload, a read failure,
    /// or an unreadable payload all degrade to an empty cart. Failures are
    /// logged, never surfaced.
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = load(store.as_ref()).await;

        Self {
            inner: Arc::new(CartStoreInner {
                products: RwLock::new(Snapshot::from(initial.into_items())),
                writer: PersistWriter::spawn(store, keys::CART),
            }),
        }
    }

    /// The current cart snapshot.
    #[must_use]
    pub fn products(&self) -> Snapshot {
        self.inner
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Add a product to the cart.
    ///
    /// An id already in the cart bumps that line item's quantity instead of
    /// creating a duplicate row; a new id is appended at quantity 1.
    pub fn add_to_cart(&self, info: ProductInfo) {
        self.mutate(|cart| cart.upsert(info));
    }

    /// Increase the quantity of the matching line item by one.
    ///
    /// Unknown ids are a silent no-op: no snapshot change, no persistence
    /// write.
    pub fn increment(&self, id: &ProductId) {
        self.mutate(|cart| cart.increment(id));
    }

    /// Decrease the quantity of the matching line item by one, removing the
    /// item entirely when its quantity reaches zero.
    ///
    /// Unknown ids are a silent no-op.
    pub fn decrement(&self, id: &ProductId) {
        self.mutate(|cart| cart.decrement(id));
    }

    /// Wait until every queued persistence write has been attempted.
    ///
    /// The mutation API never waits on storage; short-lived processes call
    /// this once before exit so the final cart reaches the device. Long-lived
    /// consumers never need it.
    pub async fn flush(&self) {
        self.inner.writer.flush().await;
    }

    /// Apply `op` to the current cart. On change, install the new snapshot
    /// and queue a persistence write of the full cart; on a no-op, leave the
    /// snapshot untouched.
    fn mutate(&self, op: impl FnOnce(&mut Cart) -> bool) {
        let mut guard = self
            .inner
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut cart = Cart::from_items(guard.to_vec());
        if !op(&mut cart) {
            return;
        }

        let payload = serialize(&cart);
        *guard = Snapshot::from(cart.into_items());
        drop(guard);

        if let Some(payload) = payload {
            self.inner.writer.enqueue(payload);
        }
    }
}

/// Serialize the cart payload, absorbing the (practically unreachable)
/// failure case so mutations stay infallible.
fn serialize(cart: &Cart) -> Option<String> {
    match serde_json::to_string(cart) {
        Ok(payload) => Some(payload),
        Err(error) => {
            tracing::warn!("failed to serialize cart payload: {error}");
            None
        }
    }
}

/// Best-effort warm start from the persisted payload.
async fn load(store: &dyn KeyValueStore) -> Cart {
    match store.get(keys::CART).await {
        Ok(Some(payload)) => match serde_json::from_str::<Cart>(&payload) {
            Ok(cart) => {
                tracing::debug!("restored {} cart item(s) from storage", cart.len());
                cart
            }
            Err(error) => {
                tracing::warn!("ignoring unreadable cart payload: {error}");
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(error) => {
            tracing::warn!("failed to read persisted cart: {error}");
            Cart::new()
        }
    }
}
