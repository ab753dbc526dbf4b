//! # Currency Module
//!
//! The two currencies of the transition period and the fixed conversion
//! between them.
//!
//! ## The Legal Context
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  During the BGN→EUR changeover a bill may be paid in either         │
//! │  currency or a mix of both, but change is returned in euro only.    │
//! │                                                                     │
//! │  The conversion rate is fixed BY LAW:                               │
//! │      1 EUR = 1.95583 BGN                                            │
//! │                                                                     │
//! │  It is a constant of the system, never user-editable.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fixed-Point Rate
//! The rate is stored scaled by 100 000 (`1.95583` → `195_583`) so that
//! conversion is pure integer arithmetic, the same trick the cent
//! representation plays for amounts. Rounding is half away from zero; the
//! backward divisor (195 583) is odd, so an exact half can never occur in
//! that direction.

use serde::{Deserialize, Serialize};

use crate::money::Amount;

// =============================================================================
// Currency
// =============================================================================

/// A currency accepted during the transition period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Euro - the primary currency. Change is always computed in euro.
    Eur,
    /// Bulgarian lev - the secondary currency, accepted at the fixed rate.
    Bgn,
}

impl Currency {
    /// ISO 4217 code, for display.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Bgn => "BGN",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// The scale factor of [`ExchangeRate`]: rates carry 5 fractional digits.
const RATE_SCALE: i128 = 100_000;

/// The fixed BGN-per-EUR conversion rate (1 EUR = 1.95583 BGN).
pub const EUR_TO_BGN: ExchangeRate = ExchangeRate::from_scaled(195_583);

/// A fixed exchange rate in hundred-thousandths.
///
/// ## Why Fixed-Point?
/// `195_583` hundred-thousandths = 1.95583. Conversion then needs only
/// integer multiply/divide with an explicit rounding term, exactly like the
/// cent representation of [`Amount`]. No floating point anywhere on the
/// money path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate(i64);

impl ExchangeRate {
    /// Creates a rate from hundred-thousandths (195_583 = 1.95583).
    ///
    /// The rate must be strictly positive by construction; the only rate in
    /// the system is the [`EUR_TO_BGN`] constant.
    #[inline]
    pub const fn from_scaled(scaled: i64) -> Self {
        ExchangeRate(scaled)
    }

    /// Returns the rate in hundred-thousandths.
    #[inline]
    pub const fn scaled(&self) -> i64 {
        self.0
    }

    /// Converts primary → secondary (EUR → BGN for [`EUR_TO_BGN`]).
    ///
    /// Result is rounded to the cent, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::{Amount, EUR_TO_BGN};
    ///
    /// // 10.00 EUR × 1.95583 = 19.5583 → 19.56 BGN
    /// assert_eq!(EUR_TO_BGN.forward(Amount::from_cents(1000)).cents(), 1956);
    /// ```
    pub fn forward(&self, amount: Amount) -> Amount {
        // i128 keeps cents × rate far from overflow
        let scaled = amount.cents() as i128 * self.0 as i128;
        Amount::from_cents(div_round_half_away(scaled, RATE_SCALE) as i64)
    }

    /// Converts secondary → primary (BGN → EUR for [`EUR_TO_BGN`]).
    ///
    /// Result is rounded to the cent, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::{Amount, EUR_TO_BGN};
    ///
    /// // 19.56 BGN / 1.95583 = 10.0009 → 10.00 EUR
    /// assert_eq!(EUR_TO_BGN.backward(Amount::from_cents(1956)).cents(), 1000);
    /// ```
    pub fn backward(&self, amount: Amount) -> Amount {
        let scaled = amount.cents() as i128 * RATE_SCALE;
        Amount::from_cents(div_round_half_away(scaled, self.0 as i128) as i64)
    }
}

/// Integer division rounding half away from zero.
///
/// For odd divisors `divisor / 2` truncates, which is still correct: an
/// exact half never occurs, and the cutoff lands between the two nearest
/// representable remainders.
fn div_round_half_away(numerator: i128, divisor: i128) -> i128 {
    debug_assert!(divisor > 0);
    let half = divisor / 2;
    if numerator >= 0 {
        (numerator + half) / divisor
    } else {
        (numerator - half) / divisor
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_pinned_values() {
        // 10.00 EUR = 19.5583 → 19.56 BGN
        assert_eq!(EUR_TO_BGN.forward(Amount::from_cents(1000)).cents(), 1956);
        // 7.77 EUR = 15.1968 → 15.20 BGN
        assert_eq!(EUR_TO_BGN.forward(Amount::from_cents(777)).cents(), 1520);
        // 1.00 EUR = 1.95583 → 1.96 BGN
        assert_eq!(EUR_TO_BGN.forward(Amount::from_cents(100)).cents(), 196);
        assert_eq!(EUR_TO_BGN.forward(Amount::zero()), Amount::zero());
    }

    #[test]
    fn test_backward_pinned_values() {
        // 19.56 BGN = 10.00086 → 10.00 EUR
        assert_eq!(EUR_TO_BGN.backward(Amount::from_cents(1956)).cents(), 1000);
        // 100.00 BGN = 51.1292 → 51.13 EUR
        assert_eq!(EUR_TO_BGN.backward(Amount::from_cents(10000)).cents(), 5113);
        // 2.00 BGN = 1.0226 → 1.02 EUR
        assert_eq!(EUR_TO_BGN.backward(Amount::from_cents(200)).cents(), 102);
    }

    #[test]
    fn test_round_trip_within_one_cent() {
        // forward-then-backward must come home within a cent for any amount
        for cents in [0, 1, 2, 99, 100, 777, 1000, 12345, 999_999] {
            let there = EUR_TO_BGN.forward(Amount::from_cents(cents));
            let back = EUR_TO_BGN.backward(there);
            assert!(
                (back.cents() - cents).abs() <= 1,
                "round trip drifted: {} -> {} -> {}",
                cents,
                there.cents(),
                back.cents()
            );
        }
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 50.00 EUR × 1.95583 = 97.7915 → below half, stays 97.79
        assert_eq!(EUR_TO_BGN.forward(Amount::from_cents(5000)).cents(), 9779);
        // exact halves round away from zero in both signs
        assert_eq!(div_round_half_away(15, 10), 2);
        assert_eq!(div_round_half_away(-15, 10), -2);
        assert_eq!(div_round_half_away(14, 10), 1);
        assert_eq!(div_round_half_away(-14, 10), -1);
        // odd divisor: 7/3 = 2.33 → 2, 8/3 = 2.67 → 3
        assert_eq!(div_round_half_away(7, 3), 2);
        assert_eq!(div_round_half_away(8, 3), 3);
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::Eur.code(), "EUR");
        assert_eq!(Currency::Bgn.to_string(), "BGN");
    }
}
