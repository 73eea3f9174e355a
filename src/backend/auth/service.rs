/**
 * Credential Service
 *
 * This module orchestrates credential verification and account creation
 * against the user datastore. Both operations are atomic from the
 * caller's perspective: every rejection happens before any side effect,
 * and any unexpected datastore/hashing/signing failure is surfaced
 * uniformly as [`AuthError::Internal`].
 *
 * # Authentication Process
 *
 * 1. Reject empty fields
 * 2. Look up user by email
 * 3. Verify password against the stored bcrypt hash
 * 4. Issue a signed token
 *
 * # Security
 *
 * - An unknown email and a wrong password both produce
 *   [`AuthError::InvalidCredentials`], so responses cannot be used to
 *   probe which emails are registered
 * - A bcrypt verification *error* is treated the same as a mismatch
 * - Passwords are hashed with a fixed bcrypt cost before storage and
 *   never logged
 */
use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::error::{AuthError, LOGIN_FIELDS_REQUIRED, REGISTER_FIELDS_REQUIRED};
use crate::shared::validation::{validate_email, MIN_PASSWORD_LEN};

/// bcrypt work factor for new password hashes
const HASH_COST: u32 = 10;

/// User fields safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// User's unique ID
    pub id: i64,
    /// User's email address
    pub email: String,
}

/// Result of a successful authentication or registration
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Signed token proving the authentication
    pub token: String,
    /// The authenticated user
    pub user: PublicUser,
}

/// Verify an email/password pair and issue a session token
///
/// # Errors
///
/// * [`AuthError::MissingFields`] - email or password is empty
/// * [`AuthError::InvalidCredentials`] - unknown user or wrong password
/// * [`AuthError::Internal`] - datastore or signing failure
pub async fn authenticate(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields {
            message: LOGIN_FIELDS_REQUIRED,
        });
    }

    let user = store
        .find_by_email(email)
        .await
        .map_err(|e| AuthError::internal(format!("user lookup failed: {e}")))?;

    let Some(user) = user else {
        tracing::warn!("Login attempt for unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    // A verification error is indistinguishable from a mismatch: both
    // answer "these credentials are not valid".
    match bcrypt::verify(password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            tracing::warn!("Invalid password for user: {}", user.email);
            return Err(AuthError::InvalidCredentials);
        }
    }

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| AuthError::internal(format!("failed to create token: {e}")))?;

    Ok(AuthSession {
        token,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    })
}

/// Create a new account and issue a session token (auto-login)
///
/// Validation order is fixed: missing fields, email format, password
/// length, confirmation match, then the uniqueness check. No record is
/// created unless every check passes.
///
/// # Errors
///
/// * [`AuthError::MissingFields`] - any of the three inputs is empty
/// * [`AuthError::InvalidEmailFormat`] - email fails the format check
/// * [`AuthError::WeakPassword`] - password shorter than 8 characters
/// * [`AuthError::PasswordMismatch`] - confirmation differs
/// * [`AuthError::EmailTaken`] - an account with this email exists
/// * [`AuthError::Internal`] - datastore, hashing, or signing failure
pub async fn register_account(
    store: &dyn UserStore,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<AuthSession, AuthError> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(AuthError::MissingFields {
            message: REGISTER_FIELDS_REQUIRED,
        });
    }

    if validate_email(email).is_err() {
        tracing::warn!("Registration rejected: invalid email format");
        return Err(AuthError::InvalidEmailFormat);
    }

    // Length is the only hard strength gate; composition is advisory
    if password.len() < MIN_PASSWORD_LEN {
        tracing::warn!("Registration rejected: password too short");
        return Err(AuthError::WeakPassword);
    }

    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    let existing = store
        .find_by_email(email)
        .await
        .map_err(|e| AuthError::internal(format!("user lookup failed: {e}")))?;
    if existing.is_some() {
        tracing::warn!("Registration rejected: email already registered");
        return Err(AuthError::EmailTaken);
    }

    let password_hash = bcrypt::hash(password, HASH_COST)
        .map_err(|e| AuthError::internal(format!("failed to hash password: {e}")))?;

    // The lookup above races with concurrent registrations; the
    // datastore's uniqueness constraint is the authoritative check.
    let user = store
        .create(email, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => AuthError::EmailTaken,
            other => AuthError::internal(format!("failed to create user: {other}")),
        })?;

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| AuthError::internal(format!("failed to create token: {e}")))?;

    tracing::info!("User created: {}", user.email);

    Ok(AuthSession {
        token,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    })
}
