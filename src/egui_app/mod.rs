//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that connects to the axum backend for authentication.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL)
//! - **`auth`** - HTTP client for the auth endpoints
//! - **`session`** - Session store state machine and durable storage
//! - **`app`** - eframe application shell
//! - **`views`** - Auth form and dashboard rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point
//! ├── config.rs       - Configuration management
//! ├── auth.rs         - AuthClient trait + HTTP implementation
//! ├── session.rs      - SessionStore, SessionStorage implementations
//! ├── app.rs          - AuthApp (eframe::App)
//! └── views/          - egui views
//! ```

pub mod config;
pub mod auth;
pub mod session;
pub mod app;
pub mod views;

// Re-export commonly used types
pub use app::AuthApp;
pub use auth::{AuthClient, HttpAuthClient};
pub use config::Config;
pub use session::{
    FileSessionStorage, MemorySessionStorage, SessionAction, SessionState, SessionStorage,
    SessionStore,
};
