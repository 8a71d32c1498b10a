//! Errors that cross the cart store boundary.
//!
//! Persistence failures never do: a failed load degrades to an empty cart
//! and a failed write leaves in-memory state ahead of the persisted copy
//! until the next successful write. Only misuse of the consumer API is
//! surfaced, since it indicates a programming error rather than a runtime
//! condition to recover from.

use thiserror::Error;

/// Consumer-side usage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Cart state or operations were accessed outside an active scope.
    #[error("no active Cart Store in scope")]
    NoActiveStore,
}
