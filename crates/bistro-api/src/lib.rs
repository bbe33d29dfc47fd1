//! # bistro-api
//!
//! HTTP API layer for the bistro ordering backend.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Token-gated REST endpoints for carts, checkout, and reporting
//! - Checkout orchestration over the gateway and notification seams
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/jwt` | Issue identity token |
//! | POST | `/users` | Register user |
//! | GET | `/users/admin/{email}` | Admin check (self-match) |
//! | PATCH | `/users/user-to-admin/{id}` | Elevate role (admin) |
//! | GET | `/menu` | List menu items |
//! | GET | `/carts` | List caller's cart |
//! | POST | `/create-payment-intent` | Create charge intent |
//! | POST | `/payments` | Finalize checkout |
//! | GET | `/order-stats` | Per-category aggregation (admin) |

pub mod auth;
pub mod checkout;
pub mod handlers;
pub mod mailer;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
