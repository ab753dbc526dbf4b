//! # Money Module
//!
//! Provides the `Amount` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  The original mobile app computed change in JS floats:              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │    7.77 / 0.02 = 388.49999...       ❌ greedy split needs a guard   │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    777 / 2 = 388 remainder 1 (exact, no epsilon needed)             │
//! │                                                                     │
//! │  Every tolerance hack in the original (floor-with-fudge, 2-decimal  │
//! │  re-rounding after each subtraction) becomes plain integer math.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resto_core::money::Amount;
//!
//! // Create from cents (preferred)
//! let due = Amount::from_cents(1099); // 10.99
//!
//! // Raw user text goes through the lenient parser: commas, minus signs
//! // and garbage are normalized, never rejected
//! assert_eq!(Amount::parse_lenient("10,99").cents(), 1099);
//! assert_eq!(Amount::parse_lenient("abc").cents(), 0);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmountParseError;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in cents, tagged with no particular currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: change and shortfall are differences and may go
///   negative mid-calculation; user-entered amounts are normalized to be
///   non-negative before they reach the core (see [`Amount::parse_lenient`])
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Currency-agnostic**: the same value type flows through EUR and BGN
///   fields; the [`crate::currency`] module owns the conversion between them
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::money::Amount;
    ///
    /// let due = Amount::from_cents(1099); // 10.99
    /// assert_eq!(due.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Creates an amount from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::money::Amount;
    ///
    /// assert_eq!(Amount::from_major_minor(10, 99).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Amount(major * 100 - minor)
        } else {
            Amount(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion (euro, leva).
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99, sign dropped).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// Clamps negative values to zero.
    ///
    /// Used when a signed difference (change, shortfall) is presented as a
    /// payable amount.
    #[inline]
    pub const fn max_zero(&self) -> Self {
        if self.0 < 0 {
            Amount(0)
        } else {
            *self
        }
    }

    /// Parses raw user input, never failing.
    ///
    /// ## Normalization Rules
    /// Mirrors the input sanitization of the mobile app's amount fields:
    /// - `,` becomes `.` (Bulgarian keyboards produce commas)
    /// - minus signs are stripped (negative amounts are not enterable)
    /// - anything that still fails to parse is treated as zero
    /// - the value is rounded to 2 decimal places, half away from zero
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::money::Amount;
    ///
    /// assert_eq!(Amount::parse_lenient("7,77").cents(), 777);
    /// assert_eq!(Amount::parse_lenient("-5").cents(), 500);
    /// assert_eq!(Amount::parse_lenient(""), Amount::zero());
    /// assert_eq!(Amount::parse_lenient("x12"), Amount::zero());
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        cents_from_text(&normalized).map_or_else(Amount::zero, Amount)
    }
}

/// Parses `digits[.digits]` directly into cents.
///
/// The text is never routed through f64: inputs on the rounding boundary
/// like `1.005` have no exact binary representation and would come out a
/// cent short. Two fraction digits are taken verbatim and the third digit
/// carries when it is 5 or more; further digits cannot flip the result and
/// are ignored.
fn cents_from_text(text: &str) -> Option<i64> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let major: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let mut frac = frac_part.bytes().map(|b| i64::from(b - b'0'));
    let tens = frac.next().unwrap_or(0);
    let units = frac.next().unwrap_or(0);
    let carry = i64::from(frac.next().unwrap_or(0) >= 5);

    major
        .checked_mul(100)?
        .checked_add(tens * 10 + units + carry)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the amount as a plain 2-decimal number, e.g. `12.34`.
///
/// Currency symbols are the caller's concern; the same `Amount` can hold
/// euro or leva.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

/// Strict parsing for typed surfaces (CLI arguments).
///
/// Unlike [`Amount::parse_lenient`], this rejects malformed and negative
/// input instead of coercing it to zero. Comma decimal separators are still
/// accepted.
impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(AmountParseError::Negative {
                input: trimmed.to_string(),
            });
        }

        let normalized = trimmed.replace(',', ".");
        cents_from_text(&normalized)
            .map(Amount)
            .ok_or_else(|| AmountParseError::Malformed {
                input: trimmed.to_string(),
            })
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (denomination value × count).
impl Mul<i64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Amount(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
