//! # Reconciliation Engine
//!
//! Computes due vs. paid across both currencies and classifies the outcome.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Reconciliation Flow                             │
//! │                                                                     │
//! │  due EUR ──┐                                                        │
//! │            ├──► authoritative due (EUR wins when both set)          │
//! │  due BGN ──┘         │                                              │
//! │                      ▼                                              │
//! │  paid EUR ──┐   due_in_eur                                          │
//! │             │        │                                              │
//! │  paid BGN ──┴──► paid_in_eur = paid EUR + paid BGN / 1.95583        │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  change = paid_in_eur − due_in_eur                                  │
//! │                      │                                              │
//! │        ┌─────────────┼─────────────┐                                │
//! │        ▼             ▼             ▼                                │
//! │   > 0.01 EUR     within ±0.01   < −0.01 EUR                         │
//! │   "change"        "exact"       "insufficient"                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and synchronous: the caller re-invokes [`reconcile`] on every input
//! change, there is no cached state.

use serde::{Deserialize, Serialize};

use crate::currency::{Currency, EUR_TO_BGN};
use crate::money::Amount;

// =============================================================================
// Status
// =============================================================================

/// Tolerance for status classification, in cents.
///
/// A discrepancy of at most one cent counts as an exact payment. Conversion
/// between the currencies rounds to the cent, so a customer paying the
/// converted equivalent of the due amount can land a cent off without owing
/// or being owed anything.
pub const TOLERANCE_CENTS: i64 = 1;

/// The outcome of comparing due and paid amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Paid more than due: change must be returned (in euro).
    Change,
    /// Paid within a cent of the due amount.
    Exact,
    /// Paid less than due.
    Insufficient,
}

// =============================================================================
// Result
// =============================================================================

/// The full outcome of a reconciliation.
///
/// All derived fields are in the primary currency (euro), regardless of
/// which input fields were populated. The four input amounts are echoed
/// back with the non-authoritative due field filled in by conversion, which
/// is what the history log stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    /// Due amount in euro (authoritative or derived from the BGN field).
    pub due_eur: Amount,
    /// Due amount in leva (authoritative or derived from the EUR field).
    pub due_bgn: Amount,
    /// Paid in euro, as entered.
    pub paid_eur: Amount,
    /// Paid in leva, as entered.
    pub paid_bgn: Amount,

    /// The due amount reduced to euro.
    pub due_in_eur: Amount,
    /// Everything paid, reduced to euro.
    pub paid_in_eur: Amount,
    /// Signed: positive means change is owed to the customer.
    pub change_in_eur: Amount,
    /// Signed: positive means the customer still owes this much.
    pub remaining_in_eur: Amount,

    pub status: PaymentStatus,
}

impl ReconciliationResult {
    /// Change owed to the customer, clamped to zero when there is none.
    #[inline]
    pub fn change(&self) -> Amount {
        self.change_in_eur.max_zero()
    }

    /// Shortfall still owed by the customer, clamped to zero.
    #[inline]
    pub fn shortfall(&self) -> Amount {
        self.remaining_in_eur.max_zero()
    }

    /// The amount to add in the given currency to settle the bill exactly.
    ///
    /// This backs the "quick pay" action: one tap tops the paid field up by
    /// the outstanding remainder, in whichever currency the payer has.
    pub fn top_up(&self, currency: Currency) -> Amount {
        let remaining = self.shortfall();
        match currency {
            Currency::Eur => remaining,
            Currency::Bgn => EUR_TO_BGN.forward(remaining),
        }
    }
}

// =============================================================================
// Reconcile
// =============================================================================

/// Reconciles a dual-currency payment against a dual-currency due amount.
///
/// ## Rules
/// 1. A non-zero euro due amount is authoritative and the leva due is
///    derived from it; otherwise a non-zero leva due is authoritative.
///    Zero means "field left empty" - the two due fields are mutually
///    derived and never independently set, so an entered-but-zero due is
///    indistinguishable from an empty one by design.
/// 2. Paid amounts in both currencies always add up:
///    `paid_in_eur = paid_eur + paid_bgn / rate`.
/// 3. Classification is tolerance-based; see [`TOLERANCE_CENTS`].
///
/// Inputs are expected to be non-negative (the lenient parser strips minus
/// signs before anything reaches this function).
///
/// ## Example
/// ```rust
/// use resto_core::money::Amount;
/// use resto_core::reconcile::{reconcile, PaymentStatus};
///
/// let r = reconcile(
///     Amount::from_cents(1000), // due 10.00 EUR
///     Amount::zero(),
///     Amount::from_cents(1500), // paid 15.00 EUR
///     Amount::zero(),
/// );
/// assert_eq!(r.status, PaymentStatus::Change);
/// assert_eq!(r.change().cents(), 500);
/// ```
pub fn reconcile(
    due_eur: Amount,
    due_bgn: Amount,
    paid_eur: Amount,
    paid_bgn: Amount,
) -> ReconciliationResult {
    // Rule 1: resolve the authoritative due and derive its twin.
    let (due_eur, due_bgn) = if !due_eur.is_zero() {
        (due_eur, EUR_TO_BGN.forward(due_eur))
    } else if !due_bgn.is_zero() {
        (EUR_TO_BGN.backward(due_bgn), due_bgn)
    } else {
        (Amount::zero(), Amount::zero())
    };

    let due_in_eur = due_eur;
    let paid_in_eur = paid_eur + EUR_TO_BGN.backward(paid_bgn);

    let change_in_eur = paid_in_eur - due_in_eur;
    let remaining_in_eur = due_in_eur - paid_in_eur;

    let status = if change_in_eur.cents() > TOLERANCE_CENTS {
        PaymentStatus::Change
    } else if change_in_eur.cents() < -TOLERANCE_CENTS {
        PaymentStatus::Insufficient
    } else {
        PaymentStatus::Exact
    };

    ReconciliationResult {
        due_eur,
        due_bgn,
        paid_eur,
        paid_bgn,
        due_in_eur,
        paid_in_eur,
        change_in_eur,
        remaining_in_eur,
        status,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(c: i64) -> Amount {
        Amount::from_cents(c)
    }

    #[test]
    fn test_exact_payment() {
        let r = reconcile(cents(1000), Amount::zero(), cents(1000), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Exact);
        assert_eq!(r.change_in_eur, Amount::zero());
        assert_eq!(r.remaining_in_eur, Amount::zero());
    }

    #[test]
    fn test_change_owed() {
        let r = reconcile(cents(1000), Amount::zero(), cents(1500), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Change);
        assert_eq!(r.change().cents(), 500);
        assert_eq!(r.shortfall(), Amount::zero());
    }

    #[test]
    fn test_insufficient() {
        let r = reconcile(cents(1000), Amount::zero(), cents(500), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Insufficient);
        assert_eq!(r.shortfall().cents(), 500);
        assert_eq!(r.change(), Amount::zero());
    }

    #[test]
    fn test_one_cent_over_is_exact() {
        // conversion rounding may leave a one-cent discrepancy; tolerated
        let r = reconcile(cents(1000), Amount::zero(), cents(1001), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Exact);

        let r = reconcile(cents(1000), Amount::zero(), cents(1002), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Change);
    }

    #[test]
    fn test_due_in_bgn_derives_eur() {
        // due 19.56 BGN → 10.00 EUR
        let r = reconcile(Amount::zero(), cents(1956), cents(1000), Amount::zero());
        assert_eq!(r.due_in_eur.cents(), 1000);
        assert_eq!(r.due_bgn.cents(), 1956);
        assert_eq!(r.status, PaymentStatus::Exact);
    }

    #[test]
    fn test_eur_due_authoritative_over_bgn() {
        // both populated: EUR wins, BGN is rewritten from it
        let r = reconcile(cents(1000), cents(9999), cents(1000), Amount::zero());
        assert_eq!(r.due_in_eur.cents(), 1000);
        assert_eq!(r.due_bgn.cents(), 1956);
    }

    #[test]
    fn test_mixed_currency_payment() {
        // due 10.00 EUR; paid 5.00 EUR + 9.78 BGN (= 5.00 EUR) → exact
        let r = reconcile(cents(1000), Amount::zero(), cents(500), cents(978));
        assert_eq!(r.paid_in_eur.cents(), 1000);
        assert_eq!(r.status, PaymentStatus::Exact);
    }

    #[test]
    fn test_no_due_amount() {
        // nothing due: anything paid is change
        let r = reconcile(Amount::zero(), Amount::zero(), cents(500), Amount::zero());
        assert_eq!(r.due_in_eur, Amount::zero());
        assert_eq!(r.status, PaymentStatus::Change);

        let r = reconcile(Amount::zero(), Amount::zero(), Amount::zero(), Amount::zero());
        assert_eq!(r.status, PaymentStatus::Exact);
    }

    #[test]
    fn test_top_up_amounts() {
        let r = reconcile(cents(1000), Amount::zero(), cents(500), Amount::zero());
        assert_eq!(r.top_up(Currency::Eur).cents(), 500);
        // 5.00 EUR × 1.95583 = 9.77915 → 9.78 BGN
        assert_eq!(r.top_up(Currency::Bgn).cents(), 978);

        // nothing outstanding → nothing to add
        let r = reconcile(cents(1000), Amount::zero(), cents(1500), Amount::zero());
        assert_eq!(r.top_up(Currency::Eur), Amount::zero());
        assert_eq!(r.top_up(Currency::Bgn), Amount::zero());
    }

    #[test]
    fn test_pure_and_deterministic() {
        let a = reconcile(cents(777), Amount::zero(), cents(123), cents(456));
        let b = reconcile(cents(777), Amount::zero(), cents(123), cents(456));
        assert_eq!(a, b);
    }
}
