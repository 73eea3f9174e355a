//! Backend Error Types
//!
//! This module defines the error taxonomy used by the authentication
//! backend and its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - AuthError taxonomy and status mapping
//! └── conversion.rs   - IntoResponse implementation
//! ```

/// Error taxonomy and status mapping
pub mod types;

/// HTTP response conversion
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorResponse;
pub use types::{AuthError, LOGIN_FIELDS_REQUIRED, REGISTER_FIELDS_REQUIRED};
