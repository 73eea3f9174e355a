/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints into the router.
 *
 * # Routes
 *
 * - `POST /api/auth/login` - User authentication
 * - `POST /api/auth/register` - Account creation
 *
 * Both routes are public: login returns a session token, register
 * creates the account and returns a token for immediate use.
 */
use axum::Router;

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the authentication routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/register", axum::routing::post(register))
}
