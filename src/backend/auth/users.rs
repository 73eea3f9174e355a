/**
 * User Datastore
 *
 * This module defines the persisted user record and the datastore
 * interface the credential service talks to. The core only ever needs
 * two operations: find a user by email and create one. Email uniqueness
 * is the datastore's invariant; a concurrent duplicate create surfaces
 * as [`StoreError::DuplicateEmail`].
 */
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Mutex;
use thiserror::Error;

/// User record as persisted by the datastore
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user ID, assigned by the datastore
    pub id: i64,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// Datastore failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email uniqueness constraint rejected a create
    #[error("email already exists")]
    DuplicateEmail,

    /// Any other datastore failure
    #[error("datastore error: {0}")]
    Backend(String),
}

/// Datastore interface for user records
///
/// Only lookup-by-email and create are needed by the auth core; there is
/// deliberately no update or delete.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by email, or `None` if no such account exists
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Create a new user with an already-hashed password
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn create(&self, email: &str, password_hash: &str) -> Result<UserRecord, StoreError>;
}

/// PostgreSQL-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<UserRecord, StoreError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            _ => StoreError::Backend(e.to_string()),
        })
    }
}

/// In-memory user store
///
/// Used when no `DATABASE_URL` is configured (local development) and by
/// tests. IDs are assigned sequentially starting at 1, and the
/// uniqueness check happens inside the lock so concurrent creates for
/// the same email resolve to exactly one winner.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .lock()
            .map_err(|_| StoreError::Backend("user store lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<UserRecord, StoreError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| StoreError::Backend("user store lock poisoned".to_string()))?;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = UserRecord {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_find_missing_user() {
        let store = MemoryUserStore::new();
        let found = store.find_by_email("ghost@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_assigns_sequential_ids() {
        let store = MemoryUserStore::new();
        let first = store.create("a@example.com", "hash-a").await.unwrap();
        let second = store.create("b@example.com", "hash-b").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryUserStore::new();
        store.create("user@example.com", "hash").await.unwrap();
        let found = store.find_by_email("user@example.com").await.unwrap();
        let found = found.expect("user should exist");
        assert_eq!(found.email, "user@example.com");
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_memory_store_rejects_duplicate_email() {
        let store = MemoryUserStore::new();
        store.create("user@example.com", "hash").await.unwrap();
        let result = store.create("user@example.com", "other-hash").await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }
}
