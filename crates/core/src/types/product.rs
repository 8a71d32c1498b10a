//! Product descriptors and cart line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A candidate product handed to the cart by a consumer.
///
/// Carries everything needed to display the product in the cart except a
/// quantity: the cart decides the quantity, not the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Unique product key within the cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

/// One product entry with quantity in the cart.
///
/// The serde field names are the persisted payload format; they must
/// round-trip exactly across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique product key within the cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Units of this product in the cart; always at least 1 while present.
    pub quantity: u32,
}

impl LineItem {
    /// A product entering the cart for the first time, at quantity 1.
    #[must_use]
    pub fn first(info: ProductInfo) -> Self {
        Self {
            id: info.id,
            title: info.title,
            image_url: info.image_url,
            price: info.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shirt() -> ProductInfo {
        ProductInfo {
            id: ProductId::new("A"),
            title: "Shirt".to_owned(),
            image_url: "https://cdn.example.com/shirt.png".to_owned(),
            price: "10".parse().unwrap(),
        }
    }

    #[test]
    fn test_first_starts_at_quantity_one() {
        let item = LineItem::first(shirt());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id.as_str(), "A");
    }

    #[test]
    fn test_payload_field_names() {
        let item = LineItem::first(shirt());
        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();

        let mut fields: Vec<&str> = object.keys().map(String::as_str).collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            vec!["id", "image_url", "price", "quantity", "title"]
        );
    }
}
