//! # Routes
//!
//! Axum router configuration for the bistro ordering API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Public:
///   - GET  /, /health - Health check
///   - POST /jwt - Issue identity token
///   - POST /users - Register user (first sign-in)
///   - GET  /menu - List menu items
///   - GET  /reviews - List reviews
///   - POST /carts - Add a cart item
///
/// - Authenticated:
///   - GET    /users/admin/{email} - Admin check (self-match)
///   - GET    /carts?email= - List caller's cart (self-match)
///   - DELETE /carts/{id} - Remove one cart item (owner enforced)
///   - POST   /create-payment-intent - Obtain gateway client secret
///   - POST   /payments - Finalize checkout
///
/// - Admin:
///   - PATCH /users/user-to-admin/{id} - Elevate role
///   - GET   /admin-stats - Counts and revenue
///   - GET   /order-stats - Per-category aggregation
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Identity
        .route("/jwt", post(handlers::issue_token))
        .route("/users", post(handlers::register_user))
        .route("/users/admin/{email}", get(handlers::check_admin))
        .route("/users/user-to-admin/{id}", patch(handlers::promote_user))
        // Menu and reviews (plain reads)
        .route("/menu", get(handlers::list_menu))
        .route("/reviews", get(handlers::list_reviews))
        // Carts
        .route(
            "/carts",
            get(handlers::list_cart).post(handlers::add_cart_item),
        )
        .route("/carts/{id}", delete(handlers::remove_cart_item))
        // Checkout
        .route(
            "/create-payment-intent",
            post(handlers::create_payment_intent),
        )
        .route("/payments", post(handlers::complete_checkout))
        // Reporting
        .route("/admin-stats", get(handlers::admin_stats))
        .route("/order-stats", get(handlers::order_stats))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
