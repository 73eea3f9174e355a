/**
 * Register Handler
 *
 * This module implements the account creation handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Parse the request body
 * 2. Delegate to the credential service (validation, uniqueness check,
 *    hashing, user creation, token issuance)
 * 3. Return the token and user info (auto-login semantics)
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::register_account;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, invalid email, short password,
///   or mismatched confirmation
/// * `409 Conflict` - an account with this email already exists
/// * `500 Internal Server Error` - malformed body, datastore, hashing,
///   or signing failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        AuthError::internal(format!("malformed register body: {rejection}"))
    })?;

    tracing::info!("Registration request for: {}", request.email);

    let session = register_account(
        state.user_store.as_ref(),
        &request.email,
        &request.password,
        &request.confirm_password,
    )
    .await?;

    Ok(Json(AuthResponse {
        success: true,
        token: session.token,
        user: session.user,
        message: "Account created successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::MemoryUserStore;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn empty_state() -> AppState {
        AppState {
            user_store: Arc::new(MemoryUserStore::new()),
        }
    }

    fn request(email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = empty_state();
        let result = register(
            State(state),
            Ok(Json(request("new@example.com", "password123", "password123"))),
        )
        .await;

        let response = result.unwrap();
        assert!(response.success);
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "new@example.com");
        assert_eq!(response.message, "Account created successfully");
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let state = empty_state();
        let error = register(
            State(state),
            Ok(Json(request("invalid-email", "password123", "password123"))),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Please enter a valid email address");
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let state = empty_state();
        let error = register(
            State(state),
            Ok(Json(request("user@example.com", "short", "short"))),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.public_message(),
            "Password must be at least 8 characters"
        );
    }

    #[tokio::test]
    async fn test_register_mismatched_confirmation() {
        let state = empty_state();
        let error = register(
            State(state),
            Ok(Json(request("user@example.com", "password123", "password124"))),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Passwords do not match");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = empty_state();

        let first = register(
            State(state.clone()),
            Ok(Json(request(
                "duplicate@example.com",
                "password123",
                "password123",
            ))),
        )
        .await;
        assert!(first.is_ok());

        let error = register(
            State(state),
            Ok(Json(request(
                "duplicate@example.com",
                "password123",
                "password123",
            ))),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }
}
