//! Backend Module
//!
//! This module contains all server-side code for the auth service: an
//! axum HTTP server exposing the login and register endpoints over a
//! pluggable user datastore.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential service, token sessions, user datastore, handlers
//! - **`error`** - Backend error taxonomy and response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication core
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend shares a single [`server::AppState`] across handlers. It
//! holds an `Arc<dyn UserStore>`, so handlers are agnostic to whether
//! the datastore is PostgreSQL or the in-memory development store. Each
//! request is handled independently; the datastore's email uniqueness
//! constraint is the only cross-request consistency guarantee.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<_>, AuthError>`; the error type carries
//! its HTTP status and client-safe message, and internal failure details
//! stay in the server logs.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication core
pub mod auth;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use auth::{authenticate, register_account, PublicUser, UserStore};
pub use error::AuthError;
pub use server::create_app;
