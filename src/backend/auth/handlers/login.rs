/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login. The handler is a thin transport layer: it parses
 * the request body, delegates to the credential service, and maps the
 * outcome to a response.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body
 * - A malformed request body is treated as an internal failure (500)
 *   rather than echoing parser details back to the client
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::authenticate;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password is empty
/// * `401 Unauthorized` - user not found or password incorrect
/// * `500 Internal Server Error` - malformed body, datastore or signing failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(request) = payload
        .map_err(|rejection| AuthError::internal(format!("malformed login body: {rejection}")))?;

    tracing::info!("Login request for: {}", request.email);

    let session = authenticate(state.user_store.as_ref(), &request.email, &request.password).await?;

    tracing::info!("User logged in successfully: {}", session.user.email);

    Ok(Json(AuthResponse {
        success: true,
        token: session.token,
        user: session.user,
        message: "Login successful".to_string(),
    }))
}
