//! # Checkout Processing
//!
//! Orchestrates one logical checkout: charge-intent creation up front,
//! then payment persistence, cart clearing, and confirmation dispatch at
//! completion. The record-then-clear sequence is deliberately ordered —
//! a recorded payment with a stale cart item left behind is the lesser
//! harm versus a cleared cart with no payment record.

use bistro_core::{
    to_minor_units, ApiError, ApiResult, BoxedGateway, BoxedSink, CheckoutNotice, CheckoutPayload,
    PaymentIntent, PaymentRecord,
};
use bistro_store::{CartLedger, DeleteResult, InsertResult, Store};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Outcome of a completed checkout: the payment insert and the cart
/// clear, returned together to the caller
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    pub insert_result: InsertResult,
    pub delete_result: DeleteResult,
}

/// Checkout orchestration component
#[derive(Clone)]
pub struct CheckoutProcessor {
    store: Arc<Store>,
    carts: CartLedger,
    gateway: BoxedGateway,
    notifier: BoxedSink,
}

impl CheckoutProcessor {
    pub fn new(
        store: Arc<Store>,
        carts: CartLedger,
        gateway: BoxedGateway,
        notifier: BoxedSink,
    ) -> Self {
        Self {
            store,
            carts,
            gateway,
            notifier,
        }
    }

    /// Create a charge intent for a decimal amount. The amount converts
    /// to the gateway's minor-unit integer representation (multiply by
    /// 100, truncate). Gateway failure surfaces to the client as a
    /// checkout failure; there is no automatic retry.
    #[instrument(skip(self), fields(price = price))]
    pub async fn create_intent(
        &self,
        price: f64,
        receipt_email: Option<&str>,
    ) -> ApiResult<PaymentIntent> {
        if price.is_nan() || price < 0.0 {
            return Err(ApiError::InvalidRequest(
                "Price must be a non-negative number".to_string(),
            ));
        }

        let amount = to_minor_units(price);
        self.gateway.create_intent(amount, receipt_email).await
    }

    /// Complete a checkout: persist the payment record, remove exactly
    /// the cart items named by the payload, and dispatch a confirmation
    /// on a detached task.
    ///
    /// The two store steps are not atomic. If the cart clear removes
    /// fewer items than the payload named, the mismatch is logged and the
    /// recorded payment stands; re-running the clear is safe because
    /// deletes of already-deleted ids are no-ops.
    #[instrument(skip(self, payload), fields(email = %payload.email, cart_ids = payload.cart_ids.len()))]
    pub async fn complete(&self, payload: CheckoutPayload) -> ApiResult<CheckoutOutcome> {
        let record = PaymentRecord::from_payload(payload);
        let expected = record.cart_ids.len() as u64;
        let notice = CheckoutNotice {
            email: record.email.clone(),
            price: record.price,
            transaction_id: record.transaction_id.clone(),
        };

        // Step 1: the payment record is the audit trail; it goes first
        let insert_result = self
            .store
            .payments
            .insert(record.id.clone(), record.clone())
            .await;

        // Step 2: clear exactly the redeemed cart items
        let delete_result = self.carts.remove_many(&record.cart_ids).await;
        if delete_result.deleted_count != expected {
            warn!(
                "Cart clear mismatch for payment {}: expected {}, removed {}",
                record.id, expected, delete_result.deleted_count
            );
        }

        info!(
            "Checkout complete: payment={}, tx={}, cleared {} cart items",
            record.id, record.transaction_id, delete_result.deleted_count
        );

        // Step 3: fire-and-forget confirmation; never joined by the
        // request path, failure logged only
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_confirmation(notice).await {
                error!("Confirmation delivery failed: {}", e);
            }
        });

        Ok(CheckoutOutcome {
            insert_result,
            delete_result,
        })
    }
}
