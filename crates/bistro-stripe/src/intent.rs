//! # Stripe Payment Intents
//!
//! Creates charge intents over Stripe's PaymentIntents API. The caller
//! receives the intent's client secret and completes payment out-of-band;
//! this backend never sees card data.

use crate::config::StripeConfig;
use async_trait::async_trait;
use bistro_core::{ApiError, ApiResult, PaymentGateway, PaymentIntent};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Fixed settlement currency
const CURRENCY: &str = "usd";

/// Stripe PaymentIntents gateway
pub struct StripeIntentGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeIntentGateway {
    /// Create a new gateway. The client timeout bounds every gateway
    /// call; a timeout surfaces as a network error, which checkout
    /// classifies as a gateway failure.
    pub fn new(config: StripeConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ApiResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }
}

#[async_trait]
impl PaymentGateway for StripeIntentGateway {
    #[instrument(skip(self), fields(amount = amount))]
    async fn create_intent(
        &self,
        amount: i64,
        receipt_email: Option<&str>,
    ) -> ApiResult<PaymentIntent> {
        if amount <= 0 {
            return Err(ApiError::InvalidRequest(
                "Intent amount must be positive".to_string(),
            ));
        }

        debug!("Creating Stripe payment intent: {} {}", amount, CURRENCY);

        let mut form_params: Vec<(String, String)> = vec![
            ("amount".to_string(), amount.to_string()),
            ("currency".to_string(), CURRENCY.to_string()),
            ("payment_method_types[]".to_string(), "card".to_string()),
        ];

        if let Some(email) = receipt_email {
            form_params.push(("receipt_email".to_string(), email.to_string()));
        }

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(ApiError::Gateway {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(ApiError::Gateway {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let intent: StripeIntentResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            amount: intent.amount,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeIntentResponse {
    id: String,
    client_secret: String,
    amount: i64,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
