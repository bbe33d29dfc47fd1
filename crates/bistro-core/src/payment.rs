//! # Payment Types
//!
//! Payment records are immutable audit receipts: created exactly once per
//! successful checkout and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable receipt of a completed checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Payer email
    pub email: String,

    /// Total price in the display currency
    pub price: f64,

    /// Gateway transaction identifier
    pub transaction_id: String,

    /// Menu item identifiers purchased
    pub menu_item_ids: Vec<String>,

    /// Cart item identifiers that funded the purchase
    pub cart_ids: Vec<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Client-submitted checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<String>,
    pub cart_ids: Vec<String>,
}

impl PaymentRecord {
    /// Build a record from a checkout payload with a generated identifier
    pub fn from_payload(payload: CheckoutPayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: payload.email,
            price: payload.price,
            transaction_id: payload.transaction_id,
            menu_item_ids: payload.menu_item_ids,
            cart_ids: payload.cart_ids,
            created_at: Utc::now(),
        }
    }
}

/// Convert a decimal currency amount to the gateway's minor-unit integer
/// representation: multiply by 100 and truncate. Matches the gateway's
/// integer-cents contract; fractional tenths of a cent are dropped, not
/// rounded.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0) as i64
}
