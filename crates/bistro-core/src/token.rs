//! # Identity Tokens
//!
//! Issues and verifies the signed identity tokens that gate every
//! authenticated route. Tokens are HS256 JWTs carrying the caller's email
//! and a fixed 10-hour validity window; they are never persisted server-side.

use crate::error::{ApiError, ApiResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Fixed token validity window
const TOKEN_TTL_HOURS: i64 = 10;

/// Verified identity claim embedded in a token.
///
/// Once `TokenService::verify` succeeds, `sub` is the caller's verified
/// email for the remainder of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the caller's email
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// The verified email this claim asserts
    pub fn email(&self) -> &str {
        &self.sub
    }
}

/// Signs and verifies identity tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service from a signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token asserting `email`, valid for 10 hours
    pub fn issue(&self, email: &str) -> ApiResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return the embedded claim.
    ///
    /// A malformed token, a bad signature, and an expired token all map to
    /// `Unauthorized` — the caller cannot distinguish them.
    pub fn verify(&self, token: &str) -> ApiResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized)
    }
}
