//! # Request Handlers
//!
//! Axum request handlers for the bistro ordering API: token issuance,
//! user registration, menu and review listing, per-user carts, checkout,
//! and the admin reporting views.

use crate::auth::{ensure_self, AdminUser, AuthUser};
use crate::checkout::CheckoutOutcome;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bistro_core::{ApiError, CartItem, CheckoutPayload, NewCartItem, User};
use bistro_store::{AdminStats, CategoryStat, RegisterOutcome, UpdateResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Token issuance request
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Email the token will assert
    pub email: String,
}

/// Token issuance response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// User registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Admin-check response
#[derive(Debug, Serialize)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Cart listing query
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub email: Option<String>,
}

/// Payment-intent request
#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    /// Decimal amount to charge
    pub price: f64,
}

/// Payment-intent response
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    /// Opaque client-side secret used to complete payment out-of-band
    pub client_secret: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

pub fn api_error_to_response(err: ApiError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bistro",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Issue an identity token for a submitted email claim
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> HandlerResult<TokenResponse> {
    let token = state
        .tokens
        .issue(&request.email)
        .map_err(api_error_to_response)?;

    Ok(Json(TokenResponse { token }))
}

/// Register a user if the email is not already present
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Json<serde_json::Value> {
    let user = User::new(request.name, request.email);

    match state.directory.register(user).await {
        RegisterOutcome::Created(result) => Json(serde_json::json!(result)),
        RegisterOutcome::AlreadyExists => Json(serde_json::json!({
            "acknowledged": true,
            "inserted_id": null,
            "message": "user already exists"
        })),
    }
}

/// Check whether the given email holds the admin role. Self-match only:
/// a user cannot run the admin check for someone else's email.
pub async fn check_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(email): Path<String>,
) -> HandlerResult<AdminCheckResponse> {
    ensure_self(&auth.0, &email).map_err(api_error_to_response)?;

    let admin = state.directory.is_admin(&email).await;
    Ok(Json(AdminCheckResponse { admin }))
}

/// Elevate a user to admin (admin-gated; no self-service escalation)
#[instrument(skip(state, _admin))]
pub async fn promote_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Json<UpdateResult> {
    let result = state.directory.promote_to_admin(&id).await;
    if result.modified_count > 0 {
        info!("Elevated user {} to admin", id);
    }
    Json(result)
}

/// List the full menu
pub async fn list_menu(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.menu.all().await)
}

/// List all reviews
pub async fn list_reviews(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.reviews.all().await)
}

/// List the caller's cart items. No email in the query yields an empty
/// list; someone else's email is Forbidden.
pub async fn list_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<CartQuery>,
) -> HandlerResult<Vec<CartItem>> {
    if let Some(ref email) = query.email {
        ensure_self(&auth.0, email).map_err(api_error_to_response)?;
    }

    let items = state.carts.list_by_owner(query.email.as_deref()).await;
    Ok(Json(items))
}

/// Add a cart item
pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(item): Json<NewCartItem>,
) -> impl IntoResponse {
    let item = CartItem::from_new(item);
    Json(state.carts.add(item).await)
}

/// Remove one cart item; ownership is enforced against the verified
/// identity, and deleting an already-deleted id is a no-op success
pub async fn remove_cart_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> HandlerResult<bistro_store::DeleteResult> {
    let result = state
        .carts
        .remove_by_id(&id, auth.email())
        .await
        .map_err(api_error_to_response)?;

    Ok(Json(result))
}

/// Obtain a gateway client secret for an amount
pub async fn create_payment_intent(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<IntentRequest>,
) -> HandlerResult<IntentResponse> {
    let intent = state
        .checkout
        .create_intent(request.price, Some(auth.email()))
        .await
        .map_err(api_error_to_response)?;

    Ok(Json(IntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Finalize a checkout: record the payment, clear the redeemed cart
/// items, and dispatch the confirmation
pub async fn complete_checkout(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<CheckoutPayload>,
) -> HandlerResult<CheckoutOutcome> {
    let outcome = state
        .checkout
        .complete(payload)
        .await
        .map_err(api_error_to_response)?;

    Ok(Json(outcome))
}

/// Headline counts and total revenue (admin only)
pub async fn admin_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> HandlerResult<AdminStats> {
    let stats = state
        .reports
        .admin_stats()
        .await
        .map_err(api_error_to_response)?;

    Ok(Json(stats))
}

/// Per-category order aggregation (admin only)
pub async fn order_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> HandlerResult<Vec<CategoryStat>> {
    let stats = state
        .reports
        .order_stats()
        .await
        .map_err(api_error_to_response)?;

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_api_error_conversion() {
        let (status, json) = api_error_to_response(ApiError::Unauthorized);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.code, 401);

        let (status, _) = api_error_to_response(ApiError::Forbidden("nope".into()));
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = api_error_to_response(ApiError::Gateway {
            provider: "stripe".into(),
            message: "down".into(),
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
