//! # Bistro
//!
//! Restaurant ordering backend: menu browsing, per-user carts, checkout
//! via Stripe, and admin reporting.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export JWT_SECRET=...
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! bistro
//! ```

use bistro_api::{routes, AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new().await?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Menu items loaded: {}", state.store.menu.count().await);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🍽️  Bistro is cooking on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🔑 Tokens: POST http://{}/jwt", addr);
        info!("💳 Checkout: POST http://{}/payments", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
