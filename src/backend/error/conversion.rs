/**
 * Error Conversion
 *
 * Converts [`AuthError`] values into HTTP responses so handlers can
 * return them directly with `?`.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single field:
 * ```json
 * { "message": "Invalid credentials" }
 * ```
 *
 * Internal errors log their detailed cause here and send only the
 * generic message to the client.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::AuthError;

/// JSON body for rejected requests
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    /// Client-facing message
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            message: self.public_message(),
        });
        (status, body).into_response()
    }
}

/// Shared fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_message_only() {
        let body = ErrorResponse {
            message: "Invalid credentials".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Invalid credentials" }));
    }

    #[test]
    fn test_into_response_uses_error_status() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = AuthError::internal("bcrypt failure").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
