//! # Domain Types
//!
//! Persisted records: the history log entry and the settings blob.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Persisted Records                           │
//! │                                                                     │
//! │  ┌──────────────────┐     ┌──────────────────┐                      │
//! │  │   HistoryItem    │     │    Settings      │                      │
//! │  │  ──────────────  │     │  ──────────────  │                      │
//! │  │  id (UUID)       │     │  schema_version  │                      │
//! │  │  created_at      │     │  theme           │                      │
//! │  │  due  EUR + BGN  │     │  save_history    │                      │
//! │  │  paid EUR + BGN  │     │  save_location   │                      │
//! │  │  change EUR      │     └──────────────────┘                      │
//! │  │  location?       │                                               │
//! │  └──────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both serialize as camelCase JSON, the same wire shape the original
//! mobile app kept in localStorage, so old blobs load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Amount;
use crate::reconcile::ReconciliationResult;

// =============================================================================
// Location
// =============================================================================

/// A WGS84 coordinate attached to a history record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// =============================================================================
// History
// =============================================================================

/// One completed change calculation, as stored in the history log.
///
/// Immutable once created: records are only ever appended, deleted, or (on
/// load) re-identified when their id is missing or duplicated. Amounts are
/// cents; `change_eur_cents` is always positive because a record is only
/// created when change was actually owed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// UUID v4. Defaults to empty when missing from an old blob, which the
    /// repository repairs on load.
    #[serde(default)]
    pub id: String,

    pub created_at: DateTime<Utc>,

    pub due_eur_cents: i64,
    pub due_bgn_cents: i64,
    pub paid_eur_cents: i64,
    pub paid_bgn_cents: i64,
    pub change_eur_cents: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl HistoryItem {
    /// Builds a record from a completed reconciliation.
    ///
    /// The caller is responsible for only recording results whose status is
    /// `Change` - that gate, and the duplicate suppression, live in the
    /// history repository.
    pub fn from_result(result: &ReconciliationResult, location: Option<GeoPoint>) -> Self {
        HistoryItem {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            due_eur_cents: result.due_eur.cents(),
            due_bgn_cents: result.due_bgn.cents(),
            paid_eur_cents: result.paid_eur.cents(),
            paid_bgn_cents: result.paid_bgn.cents(),
            change_eur_cents: result.change().cents(),
            location,
        }
    }

    /// The due/paid quadruple this record was computed from.
    ///
    /// Two records with equal quadruples describe the same transaction
    /// (change follows arithmetically), which is what the repository's
    /// duplicate suppression compares.
    pub fn quadruple(&self) -> (i64, i64, i64, i64) {
        (
            self.due_eur_cents,
            self.due_bgn_cents,
            self.paid_eur_cents,
            self.paid_bgn_cents,
        )
    }

    #[inline]
    pub fn change(&self) -> Amount {
        Amount::from_cents(self.change_eur_cents)
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Current settings blob schema version.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// UI theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the system preference.
    #[default]
    Auto,
    Light,
    Dark,
}

/// Application settings.
///
/// ## Partial-Blob Merge
/// Every field carries `#[serde(default)]`, so a persisted blob missing
/// some keys (written by an older version) deserializes with the defaults
/// filled in - missing keys fall back, they never error. The version field
/// exists so a future incompatible change can migrate instead of merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Record completed change calculations in the history log.
    #[serde(default = "default_true")]
    pub save_history: bool,

    /// Attach the device location to history records.
    #[serde(default)]
    pub save_location: bool,
}

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            schema_version: SETTINGS_SCHEMA_VERSION,
            theme: ThemeMode::Auto,
            save_history: true,
            save_location: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile;

    #[test]
    fn test_settings_defaults() {
        let s = Settings::default();
        assert_eq!(s.theme, ThemeMode::Auto);
        assert!(s.save_history);
        assert!(!s.save_location);
        assert_eq!(s.schema_version, SETTINGS_SCHEMA_VERSION);
    }

    #[test]
    fn test_settings_partial_blob_merges_over_defaults() {
        // saveLocation missing → default false; saveHistory preserved
        let s: Settings = serde_json::from_str(r#"{"theme":"dark","saveHistory":false}"#)
            .expect("partial blob must deserialize");
        assert_eq!(s.theme, ThemeMode::Dark);
        assert!(!s.save_history);
        assert!(!s.save_location);
        assert_eq!(s.schema_version, SETTINGS_SCHEMA_VERSION);
    }

    #[test]
    fn test_settings_empty_blob_is_all_defaults() {
        let s: Settings = serde_json::from_str("{}").expect("empty blob must deserialize");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_history_item_from_result() {
        let result = reconcile(
            Amount::from_cents(1000),
            Amount::zero(),
            Amount::from_cents(1500),
            Amount::zero(),
        );
        let item = HistoryItem::from_result(&result, None);

        assert!(!item.id.is_empty());
        assert_eq!(item.due_eur_cents, 1000);
        assert_eq!(item.due_bgn_cents, 1956); // derived by conversion
        assert_eq!(item.paid_eur_cents, 1500);
        assert_eq!(item.change_eur_cents, 500);
        assert_eq!(item.location, None);
    }

    #[test]
    fn test_history_item_tolerates_missing_id_and_location() {
        let json = r#"{
            "createdAt": "2026-01-15T10:30:00Z",
            "dueEurCents": 1000,
            "dueBgnCents": 1956,
            "paidEurCents": 1500,
            "paidBgnCents": 0,
            "changeEurCents": 500
        }"#;
        let item: HistoryItem = serde_json::from_str(json).expect("old blob must load");
        assert!(item.id.is_empty()); // repaired later by the repository
        assert_eq!(item.location, None);
    }

    #[test]
    fn test_quadruple_identity() {
        let result = reconcile(
            Amount::from_cents(1000),
            Amount::zero(),
            Amount::from_cents(1500),
            Amount::zero(),
        );
        let a = HistoryItem::from_result(&result, None);
        let b = HistoryItem::from_result(&result, None);

        assert_ne!(a.id, b.id);
        assert_eq!(a.quadruple(), b.quadruple());
    }
}
