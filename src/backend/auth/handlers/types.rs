/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared between the login and
 * register handlers, and the desktop client deserializes the same
 * response shape.
 */
use serde::{Deserialize, Serialize};

use crate::backend::auth::service::PublicUser;

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Register request
///
/// Contains the email, password, and confirmation for account creation.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Confirmation of the password
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Auth response
///
/// Returned by both login and register on success. Registration implies
/// an authenticated session, so the shapes are identical.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Signed session token (1-hour expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: PublicUser,
    /// Human-readable outcome message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case_confirm_field() {
        let body = r#"{"email":"a@b.co","password":"password123","confirmPassword":"password123"}"#;
        let request: RegisterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.confirm_password, "password123");
    }

    #[test]
    fn test_auth_response_wire_shape() {
        let response = AuthResponse {
            success: true,
            token: "tok".to_string(),
            user: PublicUser {
                id: 2,
                email: "new@example.com".to_string(),
            },
            message: "Account created successfully".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["id"], 2);
        assert_eq!(json["user"]["email"], "new@example.com");
    }
}
