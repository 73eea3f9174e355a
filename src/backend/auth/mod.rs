//! Authentication Module
//!
//! This module handles credential verification, account creation, and
//! session tokens. It provides the HTTP handlers for the authentication
//! endpoints and the service logic behind them.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User record and the datastore interface
//! - **`service`** - Credential service (verify, register, issue tokens)
//! - **`sessions`** - Signed token generation and validation
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - UserRecord, UserStore trait, Pg/Memory stores
//! ├── service.rs      - authenticate / register_account
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - User authentication handler
//!     └── register.rs - Account creation handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password + confirmation → user created → token returned (auto-login)
//! 2. **Login**: email + password → credentials verified → token returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are signed and expire after one hour
//! - Invalid credentials return 401 with a single shared message
//!   (no information leakage)

/// User record and datastore interface
pub mod users;

/// Credential service
pub mod service;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register, AuthResponse, LoginRequest, RegisterRequest};
pub use service::{authenticate, register_account, AuthSession, PublicUser};
pub use users::{MemoryUserStore, PgUserStore, StoreError, UserRecord, UserStore};
