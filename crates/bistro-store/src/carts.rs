//! # Cart Ledger
//!
//! Owns per-user cart items: add, list-by-owner, remove. A cart item is
//! never visible to, or deletable by, an identity other than its owner.
//! Ownership on single deletes is enforced here rather than trusted to
//! the route layer.

use crate::collection::{DeleteResult, InsertResult};
use crate::store::Store;
use bistro_core::{ApiError, ApiResult, CartItem};
use std::sync::Arc;

/// Per-user cart component
#[derive(Clone)]
pub struct CartLedger {
    store: Arc<Store>,
}

impl CartLedger {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Insert a cart item. Repeated adds of the same menu item are
    /// allowed; there is no uniqueness constraint.
    pub async fn add(&self, item: CartItem) -> InsertResult {
        self.store.carts.insert(item.id.clone(), item).await
    }

    /// All cart items owned by `email`. An absent email yields an empty
    /// sequence, never an error.
    pub async fn list_by_owner(&self, email: Option<&str>) -> Vec<CartItem> {
        match email {
            Some(email) => self.store.carts.find(|item| item.email == email).await,
            None => Vec::new(),
        }
    }

    /// Delete one cart item on behalf of `requester`. A missing id is
    /// success with a zero count; an owner mismatch is `Forbidden`.
    pub async fn remove_by_id(&self, id: &str, requester: &str) -> ApiResult<DeleteResult> {
        match self.store.carts.get(id).await {
            None => Ok(DeleteResult::count(0)),
            Some(item) if item.email != requester => Err(ApiError::Forbidden(
                "Cart item belongs to another user".to_string(),
            )),
            Some(_) => Ok(self.store.carts.delete(id).await),
        }
    }

    /// Delete every cart item whose identifier is in `ids`, reporting the
    /// actual count so checkout can detect a partial mismatch. Only the
    /// checkout path calls this.
    pub async fn remove_many(&self, ids: &[String]) -> DeleteResult {
        self.store.carts.delete_many(ids).await
    }
}
