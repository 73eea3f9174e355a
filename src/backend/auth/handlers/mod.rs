//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── login.rs    - User authentication handler
//! └── register.rs - Account creation handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`register`** - POST /api/auth/register - Account creation
//!
//! Both handlers are stateless mappings from credential-service outcomes
//! to transport-level responses; all business rules live in
//! [`crate::backend::auth::service`].

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Register handler
pub mod register;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
