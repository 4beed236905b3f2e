use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl StoreError {
    /// Classify an sqlx failure against the key that was being written.
    /// Constraint violations get their own kinds; everything else stays a
    /// generic database error so no raw engine detail reaches callers.
    pub(crate) fn from_sqlx(e: SqlxError, key: &str) -> Self {
        let kind = e.as_database_error().map(|db| db.kind());
        match kind {
            Some(ErrorKind::UniqueViolation) => StoreError::DuplicateKey(key.to_string()),
            Some(ErrorKind::ForeignKeyViolation) => {
                StoreError::ReferentialIntegrity(key.to_string())
            }
            _ => StoreError::Database(e),
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}
