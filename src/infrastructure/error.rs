//! Storage failures

use thiserror::Error;

/// Any failure reported by the conversation store. Callers treat it as opaque.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// The reference has no SQL representation (booleans, arrays, objects).
    #[error("unsupported conversation reference: {0}")]
    UnsupportedKey(String),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
