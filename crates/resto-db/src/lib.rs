//! # resto-db: Persistence Layer for RestoCalc
//!
//! SQLite-backed storage for the two documents RestoCalc keeps: the
//! settings blob and the history log.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          resto-db                                   │
//! │                                                                     │
//! │   CLI commands                                                      │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   Store ──► SettingsRepository ──┐                                  │
//! │        └──► HistoryRepository  ──┼──► app_blobs (key/value JSON)    │
//! │                                  │                                  │
//! │   SqlitePool (WAL) ◄─────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Philosophy
//! Storage is best-effort: every repository has a `load_or_default` path
//! that logs the failure and hands back in-memory defaults. A broken
//! database never takes the calculator down.

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};
pub use repository::history::HistoryRepository;
pub use repository::settings::SettingsRepository;
