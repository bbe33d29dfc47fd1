//! # bistro-core
//!
//! Core types and traits for the bistro ordering backend.
//!
//! This crate provides:
//! - `TokenService` and `Claims` for signed identity tokens
//! - `User`, `MenuItem`, `CartItem`, and `PaymentRecord` document types
//! - `PaymentGateway` trait for charge-intent creation
//! - `NotificationSink` trait for fire-and-forget confirmations
//! - `ApiError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use bistro_core::{TokenService, CheckoutPayload, PaymentRecord};
//!
//! // Issue an identity token
//! let tokens = TokenService::new(&secret);
//! let token = tokens.issue("u@x.com")?;
//!
//! // Verify it on a later request
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.email(), "u@x.com");
//! ```

pub mod cart;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod notify;
pub mod payment;
pub mod token;
pub mod user;

// Re-exports for convenience
pub use cart::{CartItem, NewCartItem};
pub use error::{ApiError, ApiResult};
pub use gateway::{BoxedGateway, PaymentGateway, PaymentIntent};
pub use menu::{MenuItem, MenuSeed, Review};
pub use notify::{BoxedSink, CheckoutNotice, NotificationSink};
pub use payment::{to_minor_units, CheckoutPayload, PaymentRecord};
pub use token::{Claims, TokenService};
pub use user::{Role, User};
