//! # Access Control
//!
//! The authentication/authorization chain that gates every mutating and
//! administrative endpoint. The checks compose in a fixed order: verify
//! the identity token first, then (where required) the admin role, then
//! any self-match against a caller-supplied email.

use crate::handlers::{api_error_to_response, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    Json,
};
use bistro_core::{ApiError, Claims};

/// Extractor for authenticated routes. Verifies the bearer token and
/// yields the embedded claim; any failure is a 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The verified caller email
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers).map_err(api_error_to_response)?;
        let claims = state.tokens.verify(token).map_err(api_error_to_response)?;
        Ok(AuthUser(claims))
    }
}

/// Extractor for admin-only routes. Applies the authentication check,
/// then looks the verified email up in the users collection; a missing
/// user or a non-admin role is a 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl AdminUser {
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if !state.directory.is_admin(claims.email()).await {
            return Err(api_error_to_response(ApiError::Forbidden(
                "Admin role required".to_string(),
            )));
        }

        Ok(AdminUser(claims))
    }
}

/// Compare the verified claim's email against a caller-supplied email.
/// A mismatch is `Forbidden`: an authenticated user cannot read another
/// user's cart or impersonate another's admin-check query.
pub fn ensure_self(claims: &Claims, email: &str) -> Result<(), ApiError> {
    if claims.email() == email {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Email does not match the authenticated identity".to_string(),
        ))
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;

    let header = header.to_str().map_err(|_| ApiError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?
        .trim();

    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn claims(email: &str) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + 36_000,
        }
    }

    #[test]
    fn test_ensure_self() {
        let claims = claims("u@x.com");
        assert!(ensure_self(&claims, "u@x.com").is_ok());
        assert!(matches!(
            ensure_self(&claims, "other@x.com"),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(extract_bearer(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_extract_bearer_failures() {
        let empty = HeaderMap::new();
        assert!(matches!(
            extract_bearer(&empty),
            Err(ApiError::Unauthorized)
        ));

        let mut wrong_scheme = HeaderMap::new();
        wrong_scheme.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Basic abc123"),
        );
        assert!(matches!(
            extract_bearer(&wrong_scheme),
            Err(ApiError::Unauthorized)
        ));

        let mut blank = HeaderMap::new();
        blank.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer "),
        );
        assert!(matches!(
            extract_bearer(&blank),
            Err(ApiError::Unauthorized)
        ));
    }
}
