/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the authentication backend.
 * Every failure a handler can produce is one of these variants, and each
 * variant carries its HTTP status code and client-facing message.
 *
 * # Error Categories
 *
 * - **Validation errors** (400) - client-correctable input problems
 * - **Authorization errors** (401) - deliberately vague to prevent
 *   user enumeration
 * - **Conflict errors** (409) - email already registered
 * - **Internal errors** (500) - datastore/hashing/signing failures;
 *   details are logged server-side and never sent to the client
 */
use axum::http::StatusCode;
use thiserror::Error;

/// Required-field messages, matching the endpoint they guard
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const REGISTER_FIELDS_REQUIRED: &str = "Email, password, and confirm password are required";

/// Authentication error taxonomy
///
/// Returned by the credential service and converted to HTTP responses by
/// the `IntoResponse` impl in [`super::conversion`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more required request fields were empty
    #[error("{message}")]
    MissingFields {
        /// Field-specific message for the endpoint that rejected
        message: &'static str,
    },

    /// Email failed the permissive format check
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    /// Password shorter than the 8-character minimum
    #[error("Password must be at least 8 characters")]
    WeakPassword,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Unknown user or wrong password. One variant for both cases so the
    /// response cannot be used to probe which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists
    #[error("An account with this email already exists")]
    EmailTaken,

    /// Unexpected datastore, hashing, or signing failure. The message is
    /// for server logs only; clients see a generic body.
    #[error("internal error: {message}")]
    Internal {
        /// Detailed cause, logged but never exposed
        message: String,
    },
}

impl AuthError {
    /// Create an internal error from any displayable cause
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields { .. }
            | Self::InvalidEmailFormat
            | Self::WeakPassword
            | Self::PasswordMismatch => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    ///
    /// Identical to `Display` except for internal errors, which collapse
    /// to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingFields {
                message: LOGIN_FIELDS_REQUIRED
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::internal("db down").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_not_public() {
        let error = AuthError::internal("connection refused at 10.0.0.7");
        assert_eq!(error.public_message(), "Internal server error");
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_public_messages_match_wire_copy() {
        assert_eq!(
            AuthError::InvalidCredentials.public_message(),
            "Invalid credentials"
        );
        assert_eq!(
            AuthError::EmailTaken.public_message(),
            "An account with this email already exists"
        );
        assert_eq!(
            AuthError::PasswordMismatch.public_message(),
            "Passwords do not match"
        );
    }
}
