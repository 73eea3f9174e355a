//! Shared Module
//!
//! This module contains code used by both the backend server and the
//! desktop client. The credential validation rules live here so that the
//! sign-up form and the registration endpoint agree on what a valid
//! email and password look like.

/// Credential validation rules
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use validation::{
    password_strength, validate_confirm_password, validate_email, validate_password,
    PasswordStrength, StrengthLabel, MIN_PASSWORD_LEN,
};
