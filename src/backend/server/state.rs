/**
 * Application State
 *
 * This module defines the shared state handed to every request handler.
 * The state is cheap to clone: it holds only an `Arc` to the user
 * datastore.
 */
use std::sync::Arc;

use crate::backend::auth::users::UserStore;

/// Shared application state
///
/// Handlers reach the datastore exclusively through the [`UserStore`]
/// trait object, so the same router serves PostgreSQL in production and
/// the in-memory store in development and tests.
#[derive(Clone)]
pub struct AppState {
    /// User datastore
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create application state around a user store
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }
}
