//! Credential store: registration and verification against the `users`
//! table. Only PHC hash strings are persisted; verification is the single
//! gate for authentication and callers never compare hashes themselves.

use crate::auth;
use crate::db::sqlite::InventoryStorage;
use crate::error::StoreError;
use tracing::debug;

impl InventoryStorage {
    /// Number of registered users. Callers use a zero count to decide
    /// whether to show a first-run registration prompt.
    pub async fn user_count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Case-sensitive exact match on username.
    pub async fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT username FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.is_some())
    }

    /// Register a new user. The password is hashed on the blocking pool
    /// (argon2 is deliberately slow) and only the hash is stored. An
    /// existing username surfaces as `StoreError::DuplicateKey`.
    pub async fn register_user(&self, username: &str, password: &str) -> Result<(), StoreError> {
        let plain = password.to_string();
        let hash = tokio::task::spawn_blocking(move || auth::hash_password(&plain))
            .await
            .map_err(|e| StoreError::PasswordHash(e.to_string()))??;

        sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(hash)
            .execute(self.pool())
            .await
            .map_err(|e| StoreError::from_sqlx(e, username))?;

        debug!(username, "user registered");
        Ok(())
    }

    /// Check a username/password pair. When the username is unknown, a
    /// dummy verification still runs so the miss is not distinguishable
    /// from a wrong password by timing.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(self.pool())
                .await?;

        let plain = password.to_string();
        let ok = tokio::task::spawn_blocking(move || match row {
            Some((stored,)) => auth::verify_password(&plain, &stored),
            None => {
                auth::verify_dummy(&plain);
                false
            }
        })
        .await
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

        Ok(ok)
    }
}
