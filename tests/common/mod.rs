//! Common test utilities and helpers
//!
//! Shared fixtures for the HTTP integration tests: an in-memory-backed
//! test server and a seeded-user helper.

use std::sync::Arc;

use axum_test::TestServer;
use signon::backend::auth::users::{MemoryUserStore, UserRecord, UserStore};
use signon::backend::server::init::build_app;

/// Test server over a fresh in-memory user store
pub fn create_test_server() -> TestServer {
    create_test_server_with_store(Arc::new(MemoryUserStore::new()))
}

/// Test server over a caller-provided store
///
/// Keep a clone of the `Arc` to inspect or seed the store around the
/// HTTP surface.
pub fn create_test_server_with_store(store: Arc<dyn UserStore>) -> TestServer {
    TestServer::new(build_app(store)).expect("test server should start")
}

/// Seed a user with a real bcrypt hash of `password`
pub async fn create_test_user(store: &dyn UserStore, email: &str, password: &str) -> UserRecord {
    let password_hash = bcrypt::hash(password, 10).expect("hashing test password");
    store
        .create(email, &password_hash)
        .await
        .expect("creating test user")
}
