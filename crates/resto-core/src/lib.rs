//! # resto-core: Pure Business Logic for RestoCalc
//!
//! This crate is the **heart** of RestoCalc. It contains all calculation
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      RestoCalc Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                      CLI (apps/cli)                           │ │
//! │  │    calc ──► breakdown ──► history ──► settings                │ │
//! │  └────────────────────────────┬──────────────────────────────────┘ │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐ │
//! │  │               ★ resto-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌──────────┐ ┌───────────┐ ┌──────────────┐     │ │
//! │  │  │  money  │ │ currency │ │ reconcile │ │ denomination │     │ │
//! │  │  │ Amount  │ │ ExRate   │ │  Status   │ │  Selection   │     │ │
//! │  │  └─────────┘ └──────────┘ └───────────┘ └──────────────┘     │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO DEVICE ACCESS • PURE FUNCTIONS   │ │
//! │  └────────────────────────────┬──────────────────────────────────┘ │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐ │
//! │  │                  resto-db (Persistence Layer)                 │ │
//! │  │            SQLite blob store: settings + history              │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Amount` type with integer-cent arithmetic (no floats!)
//! - [`currency`] - the two currencies and the fixed exchange rate
//! - [`reconcile`] - due vs. paid reconciliation across both currencies
//! - [`denomination`] - note/coin tables and greedy decomposition
//! - [`types`] - persisted records (history, settings)
//! - [`error`] - strict parse errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, callable from any thread
//! 2. **No I/O**: storage and location access live in other crates
//! 3. **Integer Money**: all amounts are cents (i64); the original app's
//!    float-epsilon workarounds disappear with this representation
//!
//! ## Example Usage
//!
//! ```rust
//! use resto_core::money::Amount;
//! use resto_core::reconcile::{reconcile, PaymentStatus};
//!
//! // Due 10.00 EUR, paid 20.00 BGN -- is there change?
//! let result = reconcile(
//!     Amount::from_cents(1000),
//!     Amount::zero(),
//!     Amount::zero(),
//!     Amount::from_cents(2000),
//! );
//! assert_eq!(result.status, PaymentStatus::Change);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod denomination;
pub mod error;
pub mod money;
pub mod reconcile;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use resto_core::Amount` instead of
// `use resto_core::money::Amount`

pub use currency::{Currency, ExchangeRate, EUR_TO_BGN};
pub use denomination::{decompose, DenominationSet, Selection};
pub use error::AmountParseError;
pub use money::Amount;
pub use reconcile::{reconcile, PaymentStatus, ReconciliationResult, TOLERANCE_CENTS};
pub use types::{GeoPoint, HistoryItem, Settings, ThemeMode};
