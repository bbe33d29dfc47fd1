//! # Application State
//!
//! Shared state for the Axum application: config, the document store
//! handle, and the components constructed on top of it. No component
//! holds cross-request state of its own; the store is the only shared
//! mutable resource.

use crate::checkout::CheckoutProcessor;
use crate::mailer::{HttpMailer, LoggingSink, MailerConfig};
use bistro_core::{BoxedGateway, BoxedSink, MenuSeed, TokenService};
use bistro_store::{CartLedger, ReportingEngine, Store, UserDirectory};
use bistro_stripe::StripeIntentGateway;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET not set"))?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address: {}", e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Document store handle
    pub store: Arc<Store>,
    /// Identity token service
    pub tokens: TokenService,
    /// User lookup and registration
    pub directory: UserDirectory,
    /// Per-user carts
    pub carts: CartLedger,
    /// Admin aggregations
    pub reports: ReportingEngine,
    /// Checkout orchestration
    pub checkout: CheckoutProcessor,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the full AppState from the environment: Stripe gateway,
    /// mailer (or a logging sink when mail credentials are absent), and
    /// a store seeded from the menu config file.
    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let store = Store::new();
        store.seed_menu(load_menu_seed()).await;

        let gateway: BoxedGateway = Arc::new(
            StripeIntentGateway::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?,
        );

        let notifier: BoxedSink = match MailerConfig::from_env() {
            Some(mail_config) => Arc::new(HttpMailer::new(mail_config)?),
            None => {
                tracing::warn!("Mail credentials not set, confirmations will only be logged");
                Arc::new(LoggingSink)
            }
        };

        Ok(Self::with_parts(config, store, gateway, notifier))
    }

    /// Assemble state from explicit parts (used by tests to substitute
    /// the gateway and notification sink)
    pub fn with_parts(
        config: AppConfig,
        store: Arc<Store>,
        gateway: BoxedGateway,
        notifier: BoxedSink,
    ) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);
        let directory = UserDirectory::new(store.clone());
        let carts = CartLedger::new(store.clone());
        let reports = ReportingEngine::new(store.clone());
        let checkout = CheckoutProcessor::new(store.clone(), carts.clone(), gateway, notifier);

        Self {
            store,
            tokens,
            directory,
            carts,
            reports,
            checkout,
            config,
        }
    }
}

/// Load the menu seed from the config file
fn load_menu_seed() -> MenuSeed {
    let config_paths = [
        "config/menu.toml",
        "../config/menu.toml",
        "../../config/menu.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            match MenuSeed::from_toml(&content) {
                Ok(seed) => {
                    tracing::info!("Loaded {} menu items from {}", seed.items.len(), path);
                    return seed;
                }
                Err(e) => {
                    tracing::error!("Failed to parse {}: {}", path, e);
                    return MenuSeed::default();
                }
            }
        }
    }

    // Start with an empty menu if no seed found
    tracing::warn!("No menu seed found, starting with an empty menu");
    MenuSeed::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_is_production() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            environment: "production".to_string(),
        };
        assert!(config.is_production());
    }
}
