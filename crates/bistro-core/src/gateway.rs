//! # Payment Gateway Trait
//!
//! Seam for the external payment gateway. The API layer depends on this
//! trait; the Stripe implementation lives in `bistro-stripe`, and tests
//! substitute their own.

use crate::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A charge intent created by the gateway.
///
/// The `client_secret` is handed to the caller, who completes payment
/// out-of-band against the gateway.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Gateway's intent identifier
    pub id: String,
    /// Opaque client-side secret
    pub client_secret: String,
    /// Amount in minor units (cents)
    pub amount: i64,
}

/// Trait for payment gateway implementations
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a charge intent for `amount` minor units in the fixed
    /// currency. `receipt_email`, when present, is attached for the
    /// gateway's own receipt delivery.
    async fn create_intent(
        &self,
        amount: i64,
        receipt_email: Option<&str>,
    ) -> ApiResult<PaymentIntent>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedGateway = Arc<dyn PaymentGateway>;
