//! # History Repository
//!
//! The history log: an ordered, most-recent-first list of completed change
//! calculations, persisted as a single JSON blob.
//!
//! ## Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  record(result, location)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  status == Change?  ── no ──► skipped (nothing to log)              │
//! │       │ yes                                                         │
//! │       ▼                                                             │
//! │  same due/paid quadruple as the newest stored record?               │
//! │       │ yes ──► suppressed (the only idempotence rule in the app:   │
//! │       │         blurring the same inputs twice is one transaction)  │
//! │       ▼ no                                                          │
//! │  prepend HistoryItem, save blob                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Repair
//! Early versions stamped records with wall-clock ids, which collide and
//! sometimes went missing entirely. `load()` regenerates a UUID for any
//! record whose id is empty or already seen, and rewrites the blob when it
//! repaired anything.

use std::collections::HashSet;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use resto_core::{GeoPoint, HistoryItem, PaymentStatus, ReconciliationResult};

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_blob, write_blob};

/// Fixed blob key, carried over from the mobile app's localStorage.
pub const HISTORY_KEY: &str = "restocalc_history";

/// Repository for the history log.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    pool: SqlitePool,
}

impl HistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        HistoryRepository { pool }
    }

    /// Loads the log, most recent first, repairing broken ids.
    ///
    /// Records with a missing or duplicate id get a fresh UUID; if any
    /// repair happened the blob is rewritten so the fix sticks.
    pub async fn load(&self) -> StoreResult<Vec<HistoryItem>> {
        let mut items: Vec<HistoryItem> = match read_blob(&self.pool, HISTORY_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| StoreError::corrupt(HISTORY_KEY, e.to_string()))?,
            None => return Ok(Vec::new()),
        };

        let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
        let mut repaired = 0usize;
        for item in &mut items {
            if item.id.is_empty() || !seen.insert(item.id.clone()) {
                item.id = Uuid::new_v4().to_string();
                seen.insert(item.id.clone());
                repaired += 1;
            }
        }

        if repaired > 0 {
            info!(repaired, "regenerated history record ids");
            self.save(&items).await?;
        }

        Ok(items)
    }

    /// Loads the log, degrading to empty on any storage failure.
    pub async fn load_or_default(&self) -> Vec<HistoryItem> {
        match self.load().await {
            Ok(items) => items,
            Err(err) => {
                warn!(%err, "failed to load history, starting empty");
                Vec::new()
            }
        }
    }

    /// Records a completed reconciliation in the log.
    ///
    /// Returns the stored item, or `None` when nothing was recorded:
    /// - the result's status is not `Change` (nothing to log), or
    /// - the due/paid quadruple equals the most recent record's
    ///   (duplicate suppression - re-confirming the same inputs must not
    ///   spam the log).
    ///
    /// The save-history setting is the caller's gate; this repository only
    /// enforces the rules that belong to the log itself.
    pub async fn record(
        &self,
        result: &ReconciliationResult,
        location: Option<GeoPoint>,
    ) -> StoreResult<Option<HistoryItem>> {
        if result.status != PaymentStatus::Change {
            debug!(status = ?result.status, "no change owed, not recording");
            return Ok(None);
        }

        let mut items = self.load().await?;

        let item = HistoryItem::from_result(result, location);
        if let Some(newest) = items.first() {
            if newest.quadruple() == item.quadruple() {
                debug!("duplicate of newest record, suppressed");
                return Ok(None);
            }
        }

        items.insert(0, item.clone());
        self.save(&items).await?;

        info!(id = %item.id, change_cents = item.change_eur_cents, "history record stored");
        Ok(Some(item))
    }

    /// Deletes one record by id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Err(StoreError::not_found("HistoryItem", id));
        }

        self.save(&items).await?;
        info!(%id, "history record deleted");
        Ok(())
    }

    /// Clears the whole log.
    pub async fn clear(&self) -> StoreResult<()> {
        self.save(&[]).await?;
        info!("history cleared");
        Ok(())
    }

    async fn save(&self, items: &[HistoryItem]) -> StoreResult<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| StoreError::corrupt(HISTORY_KEY, e.to_string()))?;
        write_blob(&self.pool, HISTORY_KEY, &json).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
