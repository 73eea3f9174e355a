//! Signon - Main Library
//!
//! Signon is a minimal email/password authentication system: an axum
//! backend that issues signed session tokens, and a native egui desktop
//! client whose session store persists the authenticated session across
//! restarts.
//!
//! # Overview
//!
//! This library provides:
//! - Credential validation rules shared by client and server
//! - Login and registration HTTP endpoints over a pluggable user
//!   datastore (PostgreSQL, or in-memory for development)
//! - bcrypt password hashing and signed 1-hour session tokens
//! - A client-side session store (login/register/logout/restore) backed
//!   by durable key-value storage
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Code used by both halves
//!   - Credential validation rules and password strength scoring
//!   - Application configuration types
//!
//! - **`backend`** - Server-side code
//!   - axum HTTP server with the auth endpoints
//!   - Credential service, token sessions, user datastore
//!   - Error taxonomy and response conversion
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session store state machine with durable storage
//!   - HTTP auth client
//!   - Auth form and dashboard views
//!
//! # Usage
//!
//! ## Server
//!
//! ```rust,no_run
//! use signon::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with axum::serve
//! # }
//! ```
//!
//! ## Desktop client
//!
//! ```rust,no_run
//! // Run the native desktop app:
//! // cargo run --bin egui_app
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with custom error types in `backend::error` and
//!   `shared::validation`
//! - Authorization failures share one deliberately vague message so
//!   responses cannot be used to enumerate registered emails
//! - Internal failure details stay in server logs

/// Shared validation rules and configuration types
pub mod shared;

/// Backend server-side code
pub mod backend;

/// egui native desktop app
pub mod egui_app;
