//! Route Configuration Module
//!
//! This module assembles the HTTP routes for the auth server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Authentication endpoint wiring
//! ```

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
