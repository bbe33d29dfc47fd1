//! # Document Store
//!
//! The set of independent collections the backend persists into. There is
//! no foreign-key enforcement: cart→menu and payment→menu/cart references
//! are resolved by application-level identifier lookup.

use crate::collection::Collection;
use bistro_core::{CartItem, MenuItem, MenuSeed, PaymentRecord, Review, User};
use std::sync::Arc;

/// Handle to every collection. Injected into each component at
/// construction; the store is the only shared mutable resource.
pub struct Store {
    pub users: Collection<User>,
    pub menu: Collection<MenuItem>,
    pub reviews: Collection<Review>,
    pub carts: Collection<CartItem>,
    pub payments: Collection<PaymentRecord>,
}

impl Store {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            users: Collection::new(),
            menu: Collection::new(),
            reviews: Collection::new(),
            carts: Collection::new(),
            payments: Collection::new(),
        })
    }

    /// Seed the menu collection from parsed seed data
    pub async fn seed_menu(&self, seed: MenuSeed) {
        for item in seed.items {
            self.menu.insert(item.id.clone(), item).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_menu() {
        let store = Store::new();
        let seed = MenuSeed::from_toml(
            r#"
            [[items]]
            _id = "lentil-soup"
            name = "Lentil Soup"
            category = "soup"
            price = 6.5
            "#,
        )
        .unwrap();

        store.seed_menu(seed).await;
        assert_eq!(store.menu.count().await, 1);
        assert!(store.menu.get("lentil-soup").await.is_some());
    }
}
