//! Scoped access to the cart store.
//!
//! Consumers that cannot thread a [`CartStore`] handle through their call
//! sites get it from the ambient task scope instead. Access outside an
//! active scope is a programming error and fails immediately with a
//! [`UsageError`]; this is the guarded accessor the consumer contract
//! requires, not a mutable global.

use std::future::Future;

use crate::error::UsageError;
use crate::store::CartStore;

tokio::task_local! {
    static ACTIVE: CartStore;
}

/// Task-scoped provider for ambient [`CartStore`] access.
#[derive(Debug, Clone, Copy)]
pub struct CartScope;

impl CartScope {
    /// Run `future` with `store` installed as the active cart store.
    ///
    /// The store is in scope for the whole future, including everything it
    /// awaits. Scopes nest; the innermost store wins.
    pub async fn enter<F>(store: CartStore, future: F) -> F::Output
    where
        F: Future,
    {
        ACTIVE.scope(store, future).await
    }

    /// The active cart store.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NoActiveStore`] when called outside
    /// [`CartScope::enter`].
    pub fn current() -> Result<CartStore, UsageError> {
        ACTIVE
            .try_with(Clone::clone)
            .map_err(|_| UsageError::NoActiveStore)
    }
}
