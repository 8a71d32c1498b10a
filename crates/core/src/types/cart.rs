//! The cart collection and its merge-by-key operations.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::{LineItem, ProductInfo};

/// The ordered collection of line items held by one user on one device.
///
/// ## Invariants
///
/// - At most one line item per product id.
/// - Every held item has `quantity >= 1`; an item whose quantity would reach
///   0 is removed instead of being kept at a non-positive count.
///
/// Carts are small; lookups are linear scans by id. Mutations report whether
/// the cart changed so callers can skip persistence on no-ops. Unknown ids
/// are silently ignored rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from already-validated line items.
    ///
    /// Intended for rehydrating a payload this crate serialized; callers are
    /// expected to hand over items that satisfy the cart invariants.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// The line items in cart order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart and return its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same id already exists this behaves exactly
    /// like [`Cart::increment`]; otherwise the product is appended at
    /// quantity 1. Returns whether the cart changed (always `true`).
    pub fn upsert(&mut self, info: ProductInfo) -> bool {
        if self.get(&info.id).is_some() {
            self.increment(&info.id)
        } else {
            self.items.push(LineItem::first(info));
            true
        }
    }

    /// Increase the quantity of an existing line item by one.
    ///
    /// All other items and their order are untouched. Unknown ids are a
    /// no-op; returns whether the cart changed.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrease the quantity of an existing line item by one.
    ///
    /// An item whose quantity would reach 0 is removed from the cart
    /// entirely. All other items and their order are untouched. Unknown ids
    /// are a no-op; returns whether the cart changed.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        let Some(position) = self.items.iter().position(|item| &item.id == id) else {
            return false;
        };

        if let Some(item) = self.items.get_mut(position)
            && item.quantity > 1
        {
            item.quantity -= 1;
            return true;
        }

        self.items.remove(position);
        true
    }
}
