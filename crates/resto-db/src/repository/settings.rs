//! # Settings Repository
//!
//! Load/save for the settings blob.
//!
//! ## Merge Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  load()                                                             │
//! │                                                                     │
//! │  key absent ──────────────────────► Settings::default()             │
//! │                                                                     │
//! │  partial blob {"theme":"dark"} ───► defaults + theme=dark           │
//! │    (missing keys fall back per field, they never error)             │
//! │                                                                     │
//! │  corrupt blob ────────────────────► StoreError::Corrupt             │
//! │    (load_or_default() turns this into defaults + a warning)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-field fallback lives on the `Settings` type itself (serde
//! defaults), so adding a field never needs ad hoc merging code here.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use resto_core::Settings;

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_blob, write_blob};

/// Fixed blob key, carried over from the mobile app's localStorage.
pub const SETTINGS_KEY: &str = "restocalc_settings";

/// Repository for the settings blob.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Loads settings; a never-written store yields the defaults.
    pub async fn load(&self) -> StoreResult<Settings> {
        match read_blob(&self.pool, SETTINGS_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| StoreError::corrupt(SETTINGS_KEY, e.to_string())),
            None => Ok(Settings::default()),
        }
    }

    /// Loads settings, degrading to defaults on any storage failure.
    ///
    /// This is the path the calculator uses: a broken database must not
    /// prevent a reconciliation, so storage failures are never fatal here.
    pub async fn load_or_default(&self) -> Settings {
        match self.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Persists the full settings record.
    pub async fn save(&self, settings: &Settings) -> StoreResult<()> {
        let json = serde_json::to_string(settings)
            .map_err(|e| StoreError::corrupt(SETTINGS_KEY, e.to_string()))?;
        write_blob(&self.pool, SETTINGS_KEY, &json).await?;
        debug!("settings saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
