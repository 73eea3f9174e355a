/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route configuration into a single axum router.
 */
use axum::Router;

use crate::backend::error::conversion::not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the user datastore
///
/// # Returns
///
/// Configured axum Router ready to serve requests
///
/// # Route Details
///
/// - `POST /api/auth/login` - User authentication
/// - `POST /api/auth/register` - Account creation
/// - anything else - 404 fallback
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for unknown routes
    let router = router.fallback(not_found);

    // Use AppState as router state
    router.with_state(app_state)
}
