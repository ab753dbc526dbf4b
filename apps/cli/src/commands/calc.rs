//! `calc` - reconcile a dual-currency payment.
//!
//! The main command: runs the reconciliation, prints the outcome panel,
//! optionally the note/coin split of the change, and records the result in
//! the history log when the settings allow it.

use std::fmt::Write as _;

use clap::Args;
use tracing::{debug, warn};

use resto_core::{
    decompose, reconcile, Amount, Currency, DenominationSet, GeoPoint, PaymentStatus,
    ReconciliationResult,
};
use resto_db::Store;

use crate::commands::breakdown::render_selection;
use crate::error::AppError;
use crate::location::{self, FixedLocation, NoLocation};

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Amount due in euro (authoritative when both due amounts are given)
    #[arg(long, value_name = "AMOUNT")]
    pub due_eur: Option<Amount>,

    /// Amount due in leva
    #[arg(long, value_name = "AMOUNT")]
    pub due_bgn: Option<Amount>,

    /// Amount paid in euro
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    pub paid_eur: Amount,

    /// Amount paid in leva
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    pub paid_bgn: Amount,

    /// Latitude to attach to the history record
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude to attach to the history record
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Skip recording this calculation in the history
    #[arg(long)]
    pub no_save: bool,

    /// Also print the note/coin split of the change
    #[arg(long)]
    pub breakdown: bool,
}

pub async fn run(store: &Store, args: CalcArgs) -> Result<(), AppError> {
    let result = reconcile(
        args.due_eur.unwrap_or_else(Amount::zero),
        args.due_bgn.unwrap_or_else(Amount::zero),
        args.paid_eur,
        args.paid_bgn,
    );

    print!("{}", render_panel(&result));

    if args.breakdown && result.status == PaymentStatus::Change {
        let set = DenominationSet::for_currency(Currency::Eur);
        println!();
        print!("{}", render_selection(&decompose(result.change(), set), set));
    }

    if result.status == PaymentStatus::Change && !args.no_save {
        record_history(store, &result, &args).await;
    }

    Ok(())
}

/// Writes the result to the history log, honoring the settings.
///
/// Storage failures are logged and swallowed: the calculation already
/// succeeded and its output is on screen.
async fn record_history(store: &Store, result: &ReconciliationResult, args: &CalcArgs) {
    let settings = store.settings().load_or_default().await;
    if !settings.save_history {
        debug!("history recording disabled in settings");
        return;
    }

    let point = if settings.save_location {
        match (args.lat, args.lng) {
            (Some(lat), Some(lng)) => {
                location::resolve(&FixedLocation(GeoPoint { lat, lng })).await
            }
            _ => location::resolve(&NoLocation).await,
        }
    } else {
        None
    };

    match store.history().record(result, point).await {
        Ok(Some(item)) => println!("\nsaved to history ({})", item.id),
        Ok(None) => debug!("record suppressed as a duplicate"),
        Err(err) => warn!(%err, "could not record history entry"),
    }
}

/// Renders the due/paid/outcome panel.
pub(crate) fn render_panel(result: &ReconciliationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "due:    {} EUR  /  {} BGN",
        result.due_eur, result.due_bgn
    );
    let _ = writeln!(
        out,
        "paid:   {} EUR  +  {} BGN  (= {} EUR)",
        result.paid_eur, result.paid_bgn, result.paid_in_eur
    );
    out.push_str("----------------------------------------\n");

    match result.status {
        PaymentStatus::Change => {
            let _ = writeln!(out, "change to return: {} EUR", result.change());
        }
        PaymentStatus::Exact => {
            out.push_str("exact payment, nothing to return\n");
        }
        PaymentStatus::Insufficient => {
            let _ = writeln!(out, "insufficient: {} EUR still due", result.shortfall());
            let _ = writeln!(
                out,
                "add {} EUR or {} BGN to settle",
                result.top_up(Currency::Eur),
                result.top_up(Currency::Bgn)
            );
        }
    }

    out
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
    fn test_panel_change() {
        let r = reconcile(cents(1000), Amount::zero(), cents(1500), Amount::zero());
        let text = render_panel(&r);

        assert!(text.contains("due:    10.00 EUR  /  19.56 BGN"));
        assert!(text.contains("paid:   15.00 EUR  +  0.00 BGN  (= 15.00 EUR)"));
        assert!(text.contains("change to return: 5.00 EUR"));
    }

    #[test]
    fn test_panel_exact() {
        let r = reconcile(cents(1000), Amount::zero(), cents(1000), Amount::zero());
        assert!(render_panel(&r).contains("exact payment"));
    }

    #[test]
    fn test_panel_insufficient_shows_quick_pay() {
        let r = reconcile(cents(1000), Amount::zero(), cents(500), Amount::zero());
        let text = render_panel(&r);

        assert!(text.contains("insufficient: 5.00 EUR still due"));
        assert!(text.contains("add 5.00 EUR or 9.78 BGN to settle"));
    }
}
