//! # Storage Error Types
//!
//! Error types for the persistence layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite error (sqlx::Error) / serde_json error                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Repositories: load()/save() return StoreResult                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  load_or_default(): logged and degraded to in-memory defaults       │
//! │  (storage failures are never fatal to the calculator)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database file could not be opened or the pool could not be built.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A schema migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A query failed at runtime.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// A stored blob did not deserialize.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated database content
    /// - A future schema version this build cannot read
    #[error("blob '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// A record was not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Anything else from the driver.
    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for a blob key.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::ConnectionFailed(err.to_string())
            }
            sqlx::Error::Database(db_err) => StoreError::QueryFailed(db_err.message().to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::corrupt("restocalc_settings", "expected object");
        assert_eq!(
            err.to_string(),
            "blob 'restocalc_settings' is corrupt: expected object"
        );

        let err = StoreError::not_found("HistoryItem", "abc");
        assert_eq!(err.to_string(), "HistoryItem not found: abc");
    }
}
