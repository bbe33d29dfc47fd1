//! # bistro-stripe
//!
//! Stripe implementation of the `PaymentGateway` trait over raw HTTP.
//!
//! This crate provides:
//! - `StripeConfig` loaded from environment variables
//! - `StripeIntentGateway` creating PaymentIntents and returning the
//!   client secret the frontend uses to complete payment

pub mod config;
pub mod intent;

pub use config::StripeConfig;
pub use intent::StripeIntentGateway;
