//! # Typed Collections
//!
//! Document collections with indexed lookup by identifier. Result shapes
//! mirror the wire format clients already consume from the original
//! document store: acknowledged inserts with an `inserted_id`, deletes
//! with a `deleted_count`.
//!
//! Deleting an absent identifier is a no-op with a zero count, never an
//! error — concurrent deletes of the same document are idempotent.

use serde::Serialize;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Outcome of an insert
#[derive(Debug, Clone, Serialize)]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

impl InsertResult {
    pub fn inserted(id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id.into()),
        }
    }

    /// Acknowledged, but nothing was written (e.g. duplicate register)
    pub fn none() -> Self {
        Self {
            acknowledged: true,
            inserted_id: None,
        }
    }
}

/// Outcome of a delete
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn count(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Outcome of an update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// A single typed collection keyed by document identifier
pub struct Collection<T> {
    docs: RwLock<BTreeMap<String, T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert a document under `id`
    pub async fn insert(&self, id: impl Into<String>, doc: T) -> InsertResult {
        let id = id.into();
        self.docs.write().await.insert(id.clone(), doc);
        InsertResult::inserted(id)
    }

    /// Indexed lookup by identifier
    pub async fn get(&self, id: &str) -> Option<T> {
        self.docs.read().await.get(id).cloned()
    }

    /// All documents, in identifier order
    pub async fn all(&self) -> Vec<T> {
        self.docs.read().await.values().cloned().collect()
    }

    /// Documents matching a predicate
    pub async fn find<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| pred(doc))
            .cloned()
            .collect()
    }

    /// First document matching a predicate
    pub async fn find_one<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs.read().await.values().find(|doc| pred(doc)).cloned()
    }

    /// Delete one document by identifier
    pub async fn delete(&self, id: &str) -> DeleteResult {
        let removed = self.docs.write().await.remove(id).is_some();
        DeleteResult::count(u64::from(removed))
    }

    /// Delete every document whose identifier is in `ids`, reporting how
    /// many were actually removed
    pub async fn delete_many(&self, ids: &[String]) -> DeleteResult {
        let mut docs = self.docs.write().await;
        let deleted = ids.iter().filter(|id| docs.remove(*id).is_some()).count();
        DeleteResult::count(deleted as u64)
    }

    /// Apply `f` to the document under `id` if present
    pub async fn update<F>(&self, id: &str, f: F) -> UpdateResult
    where
        F: FnOnce(&mut T),
    {
        let mut docs = self.docs.write().await;
        match docs.get_mut(id) {
            Some(doc) => {
                f(doc);
                UpdateResult {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: 1,
                }
            }
            None => UpdateResult {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            },
        }
    }

    /// Collection cardinality (fast, not lock-consistent with writers)
    pub async fn count(&self) -> u64 {
        self.docs.read().await.len() as u64
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
