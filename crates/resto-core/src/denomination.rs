//! # Denomination Module
//!
//! Official note/coin tables for both currencies and the greedy
//! decomposition that suggests a minimal-count way to lay out an amount.
//!
//! ## Greedy Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  decompose(7.77 EUR)                                                │
//! │                                                                     │
//! │  remaining 777 ── 5.00 × 1 ──► 277                                  │
//! │  remaining 277 ── 2.00 × 1 ──►  77                                  │
//! │  remaining  77 ── 0.50 × 1 ──►  27                                  │
//! │  remaining  27 ── 0.20 × 1 ──►   7                                  │
//! │  remaining   7 ── 0.05 × 1 ──►   2                                  │
//! │  remaining   2 ── 0.02 × 1 ──►   0                                  │
//! │                                                                     │
//! │  Selection: {5×1, 2×1, 0.50×1, 0.20×1, 0.05×1, 0.02×1}              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Greedy is minimal-count only because the official euro and lev tables
//! are canonical denomination systems. A future non-canonical table would
//! silently produce valid but suboptimal splits; that is a known property
//! of the algorithm, not a bug to patch here.
//!
//! With amounts in integer cents the division is exact, so none of the
//! float-tolerance guards of the original implementation are needed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::money::Amount;

// =============================================================================
// Denomination Tables
// =============================================================================

/// Euro notes and coins, in cents, descending.
pub const EUR_DENOMINATIONS: DenominationSet = DenominationSet {
    currency: Currency::Eur,
    notes: &[50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500],
    coins: &[200, 100, 50, 20, 10, 5, 2, 1],
};

/// Lev notes and coins, in stotinki, descending.
///
/// This is the table the original app shipped: the 2-лв piece counts as a
/// note and the coins run from 1 лв down to 1 стотинка.
pub const BGN_DENOMINATIONS: DenominationSet = DenominationSet {
    currency: Currency::Bgn,
    notes: &[10_000, 5_000, 2_000, 1_000, 500, 200],
    coins: &[100, 50, 20, 10, 5, 2, 1],
};

/// The official note/coin values of one currency.
///
/// Both lists are sorted descending and notes are strictly larger than
/// coins, so chaining them yields the full table in decomposition order.
/// Tables are fixed at compile time; they are legal tender sets, not
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationSet {
    pub currency: Currency,
    /// Banknote values in cents, descending.
    pub notes: &'static [i64],
    /// Coin values in cents, descending.
    pub coins: &'static [i64],
}

impl DenominationSet {
    /// The table for a currency.
    pub const fn for_currency(currency: Currency) -> &'static DenominationSet {
        match currency {
            Currency::Eur => &EUR_DENOMINATIONS,
            Currency::Bgn => &BGN_DENOMINATIONS,
        }
    }

    /// All denominations, largest first.
    pub fn descending(&self) -> impl Iterator<Item = i64> + '_ {
        self.notes.iter().chain(self.coins.iter()).copied()
    }

    /// Whether the value is a banknote (as opposed to a coin) in this set.
    pub fn is_note(&self, value_cents: i64) -> bool {
        self.notes.contains(&value_cents)
    }

    /// The smallest denomination in the set.
    pub fn smallest(&self) -> i64 {
        self.coins
            .last()
            .or_else(|| self.notes.last())
            .copied()
            .unwrap_or(0)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A chosen multiset of notes/coins: denomination value → count.
///
/// Produced by [`decompose`] as a suggestion, then freely edited by the
/// user (add a note here, drop a coin there); the running total is always
/// `Σ(value × count)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(BTreeMap<i64, u32>);

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Selection(BTreeMap::new())
    }

    /// Adds one piece of the given denomination.
    pub fn add(&mut self, value_cents: i64) {
        *self.0.entry(value_cents).or_insert(0) += 1;
    }

    /// Removes one piece of the given denomination.
    ///
    /// Dropping the last piece removes the entry entirely; removing from an
    /// absent denomination is a no-op.
    pub fn remove(&mut self, value_cents: i64) {
        if let Some(count) = self.0.get_mut(&value_cents) {
            if *count > 1 {
                *count -= 1;
            } else {
                self.0.remove(&value_cents);
            }
        }
    }

    /// Sets the count for a denomination (0 removes it).
    pub fn set(&mut self, value_cents: i64, count: u32) {
        if count == 0 {
            self.0.remove(&value_cents);
        } else {
            self.0.insert(value_cents, count);
        }
    }

    /// Count of pieces of one denomination.
    pub fn count_of(&self, value_cents: i64) -> u32 {
        self.0.get(&value_cents).copied().unwrap_or(0)
    }

    /// Total value of the selection.
    pub fn total(&self) -> Amount {
        Amount::from_cents(
            self.0
                .iter()
                .map(|(value, count)| value * i64::from(*count))
                .sum(),
        )
    }

    /// Total number of pieces.
    pub fn piece_count(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates (value, count) pairs, largest denomination first.
    pub fn iter_descending(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.0.iter().rev().map(|(v, c)| (*v, *c))
    }
}

// =============================================================================
// Decomposition
// =============================================================================

/// Greedily decomposes a target amount into notes and coins.
///
/// Largest denomination first, as many pieces as fit, then on to the next.
/// Zero and negative targets yield an empty selection; there are no error
/// conditions.
///
/// Residue smaller than the smallest denomination is silently dropped, so
/// the selection's total can fall short of the target. Both built-in
/// tables end at 1 cent, where no residue is possible; the case is
/// reachable only with a truncated custom set (pinned in tests).
///
/// ## Example
/// ```rust
/// use resto_core::denomination::{decompose, EUR_DENOMINATIONS};
/// use resto_core::money::Amount;
///
/// let selection = decompose(Amount::from_cents(777), &EUR_DENOMINATIONS);
/// assert_eq!(selection.total().cents(), 777);
/// assert_eq!(selection.count_of(500), 1); // one 5-euro note
/// ```
pub fn decompose(target: Amount, set: &DenominationSet) -> Selection {
    let mut selection = Selection::new();
    if !target.is_positive() {
        return selection;
    }

    let mut remaining = target.cents();
    for denomination in set.descending() {
        // counts are stored as u32; clamp instead of wrapping on absurd
        // targets and let the residue fall through to smaller pieces
        let count = (remaining / denomination).min(i64::from(u32::MAX));
        if count > 0 {
            selection.set(denomination, count as u32);
            remaining -= denomination * count;
        }
        if remaining == 0 {
            break;
        }
    }

    selection
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_canonical_example() {
        // 7.77 EUR = 5 + 2 + 0.50 + 0.20 + 0.05 + 0.02
        let s = decompose(Amount::from_cents(777), &EUR_DENOMINATIONS);
        assert_eq!(s.count_of(500), 1);
        assert_eq!(s.count_of(200), 1);
        assert_eq!(s.count_of(50), 1);
        assert_eq!(s.count_of(20), 1);
        assert_eq!(s.count_of(5), 1);
        assert_eq!(s.count_of(2), 1);
        assert_eq!(s.len(), 6);
        assert_eq!(s.total().cents(), 777);
    }

    #[test]
    fn test_decompose_large_amount() {
        // 1234.56 EUR: 2×500 + 1×200 + 1×20 + 1×10 + 2×2 + 0.50 + 0.05 + 0.01
        let s = decompose(Amount::from_cents(123_456), &EUR_DENOMINATIONS);
        assert_eq!(s.count_of(50_000), 2);
        assert_eq!(s.count_of(20_000), 1);
        assert_eq!(s.count_of(2_000), 1);
        assert_eq!(s.count_of(1_000), 1);
        assert_eq!(s.count_of(200), 2);
        assert_eq!(s.count_of(50), 1);
        assert_eq!(s.count_of(5), 1);
        assert_eq!(s.count_of(1), 1);
        assert_eq!(s.total().cents(), 123_456);
    }

    #[test]
    fn test_decompose_bgn_table() {
        // 3.77 лв = 2 лв note + 1 лв + 0.50 + 0.20 + 0.05 + 0.02
        let s = decompose(Amount::from_cents(377), &BGN_DENOMINATIONS);
        assert_eq!(s.count_of(200), 1);
        assert!(BGN_DENOMINATIONS.is_note(200));
        assert_eq!(s.count_of(100), 1);
        assert_eq!(s.total().cents(), 377);
    }

    #[test]
    fn test_decompose_zero_and_negative() {
        assert!(decompose(Amount::zero(), &EUR_DENOMINATIONS).is_empty());
        assert!(decompose(Amount::from_cents(-100), &EUR_DENOMINATIONS).is_empty());
    }

    #[test]
    fn test_decompose_exact_for_every_cent_value() {
        // both official tables bottom out at 1 cent, so no residue ever
        for cents in 1..=1000 {
            let eur = decompose(Amount::from_cents(cents), &EUR_DENOMINATIONS);
            assert_eq!(eur.total().cents(), cents);
            let bgn = decompose(Amount::from_cents(cents), &BGN_DENOMINATIONS);
            assert_eq!(bgn.total().cents(), cents);
        }
    }

    #[test]
    fn test_decompose_drops_residue_below_smallest() {
        // A truncated set (nothing under 5 cents): the 3-cent residue is
        // dropped and the selection undershoots the target. Accepted
        // behavior, the caller can compare total() against the target.
        let truncated = DenominationSet {
            currency: Currency::Eur,
            notes: &[500],
            coins: &[200, 100, 50, 20, 10, 5],
        };
        let s = decompose(Amount::from_cents(888), &truncated);
        assert_eq!(s.total().cents(), 885);
        assert_eq!(truncated.smallest(), 5);
    }

    #[test]
    fn test_decompose_clamps_count_at_u32_max() {
        // a single-denomination set forces the count past u32::MAX; it must
        // clamp there instead of wrapping, the excess stays unsplit
        let pennies_only = DenominationSet {
            currency: Currency::Eur,
            notes: &[],
            coins: &[1],
        };
        let target = i64::from(u32::MAX) + 5;
        let s = decompose(Amount::from_cents(target), &pennies_only);
        assert_eq!(s.count_of(1), u32::MAX);
        assert_eq!(s.total().cents(), i64::from(u32::MAX));
    }

    #[test]
    fn test_selection_mutation() {
        let mut s = Selection::new();
        s.add(500);
        s.add(500);
        s.add(2);
        assert_eq!(s.total().cents(), 1002);
        assert_eq!(s.piece_count(), 3);

        s.remove(500);
        assert_eq!(s.count_of(500), 1);
        s.remove(2);
        assert_eq!(s.count_of(2), 0);
        assert_eq!(s.total().cents(), 500);

        // removing an absent denomination is a no-op
        s.remove(10_000);
        assert_eq!(s.total().cents(), 500);
    }

    #[test]
    fn test_selection_iterates_descending() {
        let s = decompose(Amount::from_cents(777), &EUR_DENOMINATIONS);
        let values: Vec<i64> = s.iter_descending().map(|(v, _)| v).collect();
        assert_eq!(values, vec![500, 200, 50, 20, 5, 2]);
    }

    #[test]
    fn test_tables_are_descending() {
        for set in [&EUR_DENOMINATIONS, &BGN_DENOMINATIONS] {
            let all: Vec<i64> = set.descending().collect();
            for pair in all.windows(2) {
                assert!(pair[0] > pair[1], "table out of order: {:?}", all);
            }
        }
    }
}
