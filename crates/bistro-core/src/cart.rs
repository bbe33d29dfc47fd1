//! # Cart Types
//!
//! A cart item is a pending, unpurchased selection tied to one owner.
//! The price is a snapshot taken at add-time, so later menu edits cannot
//! reprice a cart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cart item owned by exactly one email identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Owner email; reads and deletes are only authorized for this identity
    pub email: String,

    /// Referenced menu item identifier
    pub menu_item_id: String,

    /// Menu item name (denormalized for display)
    pub name: String,

    /// Price snapshot at add-time
    pub price: f64,
}

/// Client-submitted cart addition (no identifier yet)
#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub email: String,
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
}

impl CartItem {
    /// Materialize a submitted item with a generated identifier
    pub fn from_new(new: NewCartItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: new.email,
            menu_item_id: new.menu_item_id,
            name: new.name,
            price: new.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_generates_id() {
        let item = CartItem::from_new(NewCartItem {
            email: "u@x.com".into(),
            menu_item_id: "greek-salad".into(),
            name: "Greek Salad".into(),
            price: 10.0,
        });

        assert!(!item.id.is_empty());
        assert_eq!(item.email, "u@x.com");
        assert_eq!(item.price, 10.0);
    }
}
