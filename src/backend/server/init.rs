/**
 * Server Initialization
 *
 * This module handles the setup of the axum HTTP server: loading the
 * datastore and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Load the user datastore (PostgreSQL, or the in-memory fallback)
 * 2. Create the application state
 * 3. Create and configure the router
 */
use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::UserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_user_store;
use crate::backend::server::state::AppState;

/// Create and configure the axum application
///
/// Loads the user datastore from the environment and builds the router.
///
/// # Returns
///
/// Configured axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing auth server");

    let user_store = load_user_store().await;

    build_app(user_store)
}

/// Build the application around an explicit datastore
///
/// Split out from [`create_app`] so tests can inject an in-memory store
/// without touching the environment.
pub fn build_app(user_store: Arc<dyn UserStore>) -> Router<()> {
    let app_state = AppState::new(user_store);
    create_router(app_state)
}
