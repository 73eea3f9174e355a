/**
 * Session Tokens
 *
 * This module handles signed token generation and validation for user
 * sessions.
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: one hour
const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Development fallback signing secret. Deployments must set JWT_SECRET;
/// this value only exists so local runs work out of the box.
const DEV_FALLBACK_SECRET: &str = "default-secret-key";

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the signing secret from the environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using the development fallback secret");
        DEV_FALLBACK_SECRET.to_string()
    })
}

/// Create a signed token for a user
///
/// # Arguments
/// * `user_id` - User ID
/// * `email` - User email
///
/// # Returns
/// Signed token string, valid for one hour
pub fn create_token(user_id: i64, email: String) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        id: user_id,
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// # Arguments
/// * `token` - Signed token string
///
/// # Returns
/// Decoded claims, or an error if the signature or expiry is invalid
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
