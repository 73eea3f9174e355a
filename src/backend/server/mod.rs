//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState shared with handlers
//! ├── config.rs       - Datastore loading from the environment
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: resolves the user datastore
//!    (PostgreSQL via `DATABASE_URL`, else the in-memory fallback)
//! 2. **State Creation**: wraps the datastore in [`state::AppState`]
//! 3. **Router Creation**: configures all routes

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{build_app, create_app};
pub use state::AppState;
