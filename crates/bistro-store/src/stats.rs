//! # Reporting Engine
//!
//! Admin-facing aggregations: headline counts plus the payment→menu join
//! that produces per-category order statistics.

use crate::store::Store;
use bistro_core::ApiResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Headline counts for the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub users: u64,
    pub menu_items: u64,
    pub orders: u64,
    pub revenue: f64,
}

/// One aggregated row per menu category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Cross-collection aggregation component
#[derive(Clone)]
pub struct ReportingEngine {
    store: Arc<Store>,
}

impl ReportingEngine {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Cardinalities of the main collections plus total revenue summed
    /// over every payment record. Counts are fast approximations, not
    /// lock-consistent snapshots across collections.
    pub async fn admin_stats(&self) -> ApiResult<AdminStats> {
        let users = self.store.users.count().await;
        let menu_items = self.store.menu.count().await;

        let payments = self.store.payments.all().await;
        let orders = payments.len() as u64;
        let revenue = payments.iter().map(|p| p.price).sum();

        Ok(AdminStats {
            users,
            menu_items,
            orders,
            revenue,
        })
    }

    /// Join every payment's menu-item identifiers against the menu
    /// collection, fan out one row per resolved item per payment, and
    /// group by category.
    ///
    /// A payment referencing a menu identifier that no longer resolves
    /// contributes zero rows for that identifier; the drop is logged but
    /// never an error.
    pub async fn order_stats(&self) -> ApiResult<Vec<CategoryStat>> {
        let payments = self.store.payments.all().await;

        // BTreeMap keeps category order deterministic
        let mut groups: BTreeMap<String, (u64, f64)> = BTreeMap::new();

        for payment in &payments {
            for menu_id in &payment.menu_item_ids {
                match self.store.menu.get(menu_id).await {
                    Some(item) => {
                        let entry = groups.entry(item.category.clone()).or_insert((0, 0.0));
                        entry.0 += 1;
                        entry.1 += item.price;
                    }
                    None => {
                        warn!(
                            "Payment {} references unresolvable menu item {}",
                            payment.id, menu_id
                        );
                    }
                }
            }
        }

        Ok(groups
            .into_iter()
            .map(|(category, (quantity, revenue))| CategoryStat {
                category,
                quantity,
                revenue,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{CheckoutPayload, MenuItem, PaymentRecord, User};

    fn menu_item(id: &str, category: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: id.into(),
            category: category.into(),
            price,
            recipe: String::new(),
            image: None,
        }
    }

    fn payment(email: &str, price: f64, menu_ids: &[&str]) -> PaymentRecord {
        PaymentRecord::from_payload(CheckoutPayload {
            email: email.into(),
            price,
            transaction_id: "pi_test".into(),
            menu_item_ids: menu_ids.iter().map(|s| s.to_string()).collect(),
            cart_ids: vec![],
        })
    }

    async fn seeded_store() -> Arc<Store> {
        let store = Store::new();
        for item in [
            menu_item("greek-salad", "salad", 10.0),
            menu_item("caesar-salad", "salad", 12.0),
            menu_item("margherita", "pizza", 15.0),
        ] {
            store.menu.insert(item.id.clone(), item).await;
        }
        store
    }

    #[tokio::test]
    async fn test_admin_stats_revenue_sum() {
        let store = seeded_store().await;
        let user = User::new("Pat", "pat@x.com");
        store.users.insert(user.id.clone(), user).await;
        for p in [
            payment("a@x.com", 25.0, &["greek-salad", "margherita"]),
            payment("b@x.com", 12.0, &["caesar-salad"]),
        ] {
            store.payments.insert(p.id.clone(), p).await;
        }

        let stats = ReportingEngine::new(store).admin_stats().await.unwrap();
        assert_eq!(stats.users, 1);
        assert_eq!(stats.menu_items, 3);
        assert_eq!(stats.orders, 2);
        assert_eq!(stats.revenue, 37.0);
    }

    #[tokio::test]
    async fn test_order_stats_groups_by_category() {
        let store = seeded_store().await;
        for p in [
            payment("a@x.com", 25.0, &["greek-salad", "margherita"]),
            payment("b@x.com", 22.0, &["caesar-salad", "greek-salad"]),
        ] {
            store.payments.insert(p.id.clone(), p).await;
        }

        let stats = ReportingEngine::new(store).order_stats().await.unwrap();
        assert_eq!(
            stats,
            vec![
                CategoryStat {
                    category: "pizza".into(),
                    quantity: 1,
                    revenue: 15.0,
                },
                CategoryStat {
                    category: "salad".into(),
                    quantity: 3,
                    revenue: 32.0,
                },
            ]
        );

        // Summed quantities equal the number of resolvable references
        let total: u64 = stats.iter().map(|s| s.quantity).sum();
        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn test_order_stats_drops_unresolvable_ids() {
        let store = seeded_store().await;
        let p = payment("a@x.com", 10.0, &["greek-salad", "retired-dish"]);
        store.payments.insert(p.id.clone(), p).await;

        let stats = ReportingEngine::new(store).order_stats().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].category, "salad");
        assert_eq!(stats[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_order_stats_empty_store() {
        let engine = ReportingEngine::new(Store::new());
        assert!(engine.order_stats().await.unwrap().is_empty());
    }
}
