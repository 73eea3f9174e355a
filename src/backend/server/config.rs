/**
 * Server Configuration
 *
 * This module handles loading the user datastore from configuration,
 * focusing on the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * If the database is missing or unreachable, the server falls back to
 * an in-memory user store so local development works without Postgres.
 * Accounts in the fallback store do not survive a restart.
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::auth::users::{MemoryUserStore, PgUserStore, UserStore};

/// Load the user datastore
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
/// 4. Falls back to [`MemoryUserStore`] on any failure
///
/// # Returns
///
/// A [`UserStore`] implementation: PostgreSQL-backed when configured,
/// in-memory otherwise.
pub async fn load_user_store() -> Arc<dyn UserStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Using in-memory user store.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory user store.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Arc::new(PgUserStore::new(pool))
}
