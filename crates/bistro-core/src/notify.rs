//! # Notification Sink
//!
//! Fire-and-forget confirmation delivery. Checkout hands a notice to the
//! sink on a detached task; delivery failure is logged by the sink's
//! implementation and never reaches the request path.

use crate::error::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Confirmation notice produced by a completed checkout
#[derive(Debug, Clone)]
pub struct CheckoutNotice {
    /// Recipient email
    pub email: String,
    /// Total charged
    pub price: f64,
    /// Gateway transaction identifier
    pub transaction_id: String,
}

/// Trait for outbound notification implementations
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver a checkout confirmation. Errors are the implementation's
    /// problem to log; callers never block on or roll back for delivery.
    async fn send_confirmation(&self, notice: CheckoutNotice) -> ApiResult<()>;
}

/// Type alias for a shared sink (dynamic dispatch)
pub type BoxedSink = Arc<dyn NotificationSink>;
