//! # bistro-store
//!
//! The document store and the components that live directly on top of it.
//!
//! This crate provides:
//! - `Collection` for typed documents with indexed lookup
//! - `Store` bundling the backend's independent collections
//! - `UserDirectory` for registration, lookup, and role elevation
//! - `CartLedger` for per-user cart items
//! - `ReportingEngine` for the payment→menu aggregations
//!
//! Cross-collection references (cart→menu, payment→menu, payment→cart)
//! carry no storage-level constraints; every join is an application-level
//! identifier lookup.

pub mod carts;
pub mod collection;
pub mod stats;
pub mod store;
pub mod users;

// Re-exports for convenience
pub use carts::CartLedger;
pub use collection::{Collection, DeleteResult, InsertResult, UpdateResult};
pub use stats::{AdminStats, CategoryStat, ReportingEngine};
pub use store::Store;
pub use users::{RegisterOutcome, UserDirectory};
