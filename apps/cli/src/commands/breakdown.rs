//! `breakdown` - split an amount into notes and coins.

use std::fmt::Write as _;

use clap::Args;

use resto_core::{decompose, Amount, DenominationSet, Selection};

use crate::commands::CurrencyArg;
use crate::error::AppError;

#[derive(Debug, Args)]
pub struct BreakdownArgs {
    /// Amount to split, e.g. `7.77` or `7,77`
    pub amount: Amount,

    /// Currency whose note/coin table to use
    #[arg(long, value_enum, default_value_t = CurrencyArg::Eur)]
    pub currency: CurrencyArg,
}

pub fn run(args: BreakdownArgs) -> Result<(), AppError> {
    let set = DenominationSet::for_currency(args.currency.into());
    let selection = decompose(args.amount, set);
    print!("{}", render_selection(&selection, set));
    Ok(())
}

/// Renders a selection as a note/coin listing with a total line.
pub(crate) fn render_selection(selection: &Selection, set: &DenominationSet) -> String {
    let mut out = String::new();

    if selection.is_empty() {
        out.push_str("nothing to split\n");
        return out;
    }

    for (value, count) in selection.iter_descending() {
        let kind = if set.is_note(value) { "note" } else { "coin" };
        let _ = writeln!(
            out,
            "{:>7} {} x {:<2} ({})",
            Amount::from_cents(value).to_string(),
            set.currency,
            count,
            kind
        );
    }
    let _ = writeln!(
        out,
        "total:  {} {} ({} pieces)",
        selection.total(),
        set.currency,
        selection.piece_count()
    );

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::EUR_TO_BGN;

    #[test]
    fn test_render_canonical_split() {
        let set = DenominationSet::for_currency(resto_core::Currency::Eur);
        let selection = decompose(Amount::from_cents(777), set);
        let text = render_selection(&selection, set);

        assert!(text.contains("5.00 EUR x 1  (note)"));
        assert!(text.contains("0.02 EUR x 1  (coin)"));
        assert!(text.contains("total:  7.77 EUR (6 pieces)"));
    }

    #[test]
    fn test_render_empty_selection() {
        let set = DenominationSet::for_currency(resto_core::Currency::Eur);
        let selection = decompose(Amount::zero(), set);
        assert_eq!(render_selection(&selection, set), "nothing to split\n");
    }

    #[test]
    fn test_render_bgn_table() {
        // 19.56 BGN, the converted twin of 10 EUR
        let set = DenominationSet::for_currency(resto_core::Currency::Bgn);
        let amount = EUR_TO_BGN.forward(Amount::from_cents(1000));
        let text = render_selection(&decompose(amount, set), set);

        assert!(text.contains("10.00 BGN x 1  (note)"));
        assert!(text.contains("total:  19.56 BGN"));
    }
}
