//! # Repositories
//!
//! Typed access to the two persisted documents. Each repository owns one
//! fixed key in the `app_blobs` table and the JSON (de)serialization behind
//! it; callers never see raw blobs.

pub mod history;
pub mod settings;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::StoreResult;

/// Reads a blob by key. `None` when the key has never been written.
pub(crate) async fn read_blob(pool: &SqlitePool, key: &str) -> StoreResult<Option<String>> {
    let value: Option<String> =
        sqlx::query_scalar("SELECT value FROM app_blobs WHERE key = ?1")
            .bind(key)
            .fetch_optional(pool)
            .await?;
    Ok(value)
}

/// Writes (upserts) a blob under its key.
pub(crate) async fn write_blob(pool: &SqlitePool, key: &str, value: &str) -> StoreResult<()> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO app_blobs (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}
