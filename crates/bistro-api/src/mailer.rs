//! # Outbound Mail
//!
//! Confirmation delivery over an HTTP email API. Checkout hands notices
//! to the sink on a detached task; nothing here ever blocks or fails a
//! request.

use async_trait::async_trait;
use bistro_core::{ApiError, ApiResult, CheckoutNotice, NotificationSink};
use reqwest::Client;
use tracing::{debug, info};

/// Mail service configuration. Optional: when the env vars are absent
/// the application falls back to `LoggingSink`.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Message endpoint of the email API
    pub api_url: String,
    /// API key (bearer)
    pub api_key: String,
    /// From address for confirmations
    pub from: String,
}

impl MailerConfig {
    /// Load from `MAIL_API_URL`, `MAIL_API_KEY`, `MAIL_FROM`. Returns
    /// `None` when the endpoint is not configured.
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("MAIL_API_URL").ok()?;
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let from = std::env::var("MAIL_FROM").unwrap_or_else(|_| "orders@bistro.dev".to_string());

        Some(Self {
            api_url,
            api_key,
            from,
        })
    }
}

/// Sink that posts confirmations to an HTTP email API
pub struct HttpMailer {
    config: MailerConfig,
    client: Client,
}

impl HttpMailer {
    pub fn new(config: MailerConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl NotificationSink for HttpMailer {
    async fn send_confirmation(&self, notice: CheckoutNotice) -> ApiResult<()> {
        debug!("Sending confirmation to {}", notice.email);

        let payload = serde_json::json!({
            "from": self.config.from,
            "to": notice.email,
            "subject": "Your order is confirmed",
            "text": format!(
                "Thanks for your order! We charged ${:.2} (transaction {}).",
                notice.price, notice.transaction_id
            ),
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Network(format!(
                "Mail API error: {} | {}",
                status, body
            )));
        }

        info!("Confirmation sent to {}", notice.email);
        Ok(())
    }
}

/// Sink that only logs; used when mail credentials are absent
pub struct LoggingSink;

#[async_trait]
impl NotificationSink for LoggingSink {
    async fn send_confirmation(&self, notice: CheckoutNotice) -> ApiResult<()> {
        info!(
            "Checkout confirmation (not mailed): {} charged ${:.2}, tx={}",
            notice.email, notice.price, notice.transaction_id
        );
        Ok(())
    }
}
