//! End-to-end cart behavior through the store and the scoped provider.
//!
//! Run with: cargo test -p basket-integration-tests

use basket_cart::{CartScope, UsageError};
use basket_core::ProductId;

use basket_integration_tests::{TestCart, product};

/// (id, quantity) pairs in cart order.
fn quantities(cart: &TestCart) -> Vec<(String, u32)> {
    cart.store
        .products()
        .iter()
        .map(|item| (item.id.as_str().to_owned(), item.quantity))
        .collect()
}

#[tokio::test]
async fn test_add_increment_decrement_walkthrough() {
    let cart = TestCart::open().await;

    cart.store.add_to_cart(product("A", "Shirt", "10"));
    assert_eq!(quantities(&cart), vec![("A".to_owned(), 1)]);

    cart.store.add_to_cart(product("A", "Shirt", "10"));
    assert_eq!(quantities(&cart), vec![("A".to_owned(), 2)]);

    cart.store.decrement(&ProductId::new("A"));
    assert_eq!(quantities(&cart), vec![("A".to_owned(), 1)]);

    cart.store.decrement(&ProductId::new("A"));
    assert!(cart.store.products().is_empty());
}

#[tokio::test]
async fn test_increment_leaves_other_items_untouched() {
    let cart = TestCart::open().await;

    cart.store.add_to_cart(product("A", "Shirt", "10"));
    cart.store.add_to_cart(product("B", "Mug", "5"));
    cart.store.increment(&ProductId::new("B"));
    cart.store.increment(&ProductId::new("B"));
    cart.store.increment(&ProductId::new("B"));

    assert_eq!(
        quantities(&cart),
        vec![("A".to_owned(), 1), ("B".to_owned(), 4)]
    );
}

#[tokio::test]
async fn test_unknown_ids_are_silent_noops() {
    let cart = TestCart::open().await;
    cart.store.add_to_cart(product("A", "Shirt", "10"));

    let before = cart.store.products();
    cart.store.increment(&ProductId::new("missing"));
    cart.store.decrement(&ProductId::new("missing"));

    // Identical snapshot object: nothing changed, nothing replaced.
    assert!(std::sync::Arc::ptr_eq(&before, &cart.store.products()));
}

#[tokio::test]
async fn test_scope_provides_ambient_store_access() {
    let cart = TestCart::open().await;

    CartScope::enter(cart.store.clone(), async {
        let store = CartScope::current().expect("inside scope");
        store.add_to_cart(product("A", "Shirt", "10"));
        store.add_to_cart(product("A", "Shirt", "10"));
    })
    .await;

    assert_eq!(quantities(&cart), vec![("A".to_owned(), 2)]);
}

#[tokio::test]
async fn test_scope_access_outside_enter_fails() {
    assert_eq!(
        CartScope::current().unwrap_err(),
        UsageError::NoActiveStore
    );
}
