//! `history` - inspect and manage the calculation log.
//!
//! `show` prints the record in the same shareable text form the mobile app
//! produced, Bulgarian labels included, so a record pasted into a chat looks
//! identical regardless of which front end wrote it.

use clap::Subcommand;

use resto_core::{Amount, HistoryItem};
use resto_db::{Store, StoreError};

use crate::error::AppError;

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List recorded calculations, newest first
    List {
        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one record as shareable text
    Show {
        #[arg(long)]
        id: String,
    },
    /// Delete one record
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Delete all records
    Clear,
}

pub async fn run(store: &Store, action: HistoryAction) -> Result<(), AppError> {
    let repo = store.history();

    match action {
        HistoryAction::List { limit } => {
            let items = repo.load().await?;
            if items.is_empty() {
                println!("history is empty");
                return Ok(());
            }
            for item in items.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{}", list_line(item));
            }
        }
        HistoryAction::Show { id } => {
            let items = repo.load().await?;
            let item = items
                .iter()
                .find(|item| item.id == id)
                .ok_or_else(|| StoreError::not_found("HistoryItem", &id))?;
            println!("{}", share_text(item));
        }
        HistoryAction::Delete { id } => {
            repo.delete(&id).await?;
            println!("deleted {id}");
        }
        HistoryAction::Clear => {
            repo.clear().await?;
            println!("history cleared");
        }
    }

    Ok(())
}

fn list_line(item: &HistoryItem) -> String {
    format!(
        "{}  {}  change {} EUR  (due {} EUR / {} BGN)",
        item.id,
        item.created_at.format("%Y-%m-%d %H:%M"),
        item.change(),
        Amount::from_cents(item.due_eur_cents),
        Amount::from_cents(item.due_bgn_cents),
    )
}

/// The shareable text form of one record.
///
/// Layout carried over from the mobile app verbatim: header, event time,
/// due in both currencies, the two paid amounts, a separator, the change.
pub(crate) fn share_text(item: &HistoryItem) -> String {
    format!(
        "Данни за плащане в две валути и ресто в евро\n\
         Дата на събитие: {stamp}\n\
         Дължима сума: {due_eur} EUR или {due_bgn} BGN\n\
         Платено в евро: {paid_eur} EUR\n\
         Платено в лева: {paid_bgn} BGN\n\
         ---\n\
         Ресто за получаване: {change} EUR",
        stamp = item.created_at.format("%H:%M %d.%m.%Y"),
        due_eur = Amount::from_cents(item.due_eur_cents),
        due_bgn = Amount::from_cents(item.due_bgn_cents),
        paid_eur = Amount::from_cents(item.paid_eur_cents),
        paid_bgn = Amount::from_cents(item.paid_bgn_cents),
        change = item.change(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_item() -> HistoryItem {
        HistoryItem {
            id: "11111111-2222-3333-4444-555555555555".into(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap(),
            due_eur_cents: 1000,
            due_bgn_cents: 1956,
            paid_eur_cents: 1500,
            paid_bgn_cents: 0,
            change_eur_cents: 500,
            location: None,
        }
    }

    #[test]
    fn test_share_text_layout() {
        let text = share_text(&sample_item());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Данни за плащане в две валути и ресто в евро");
        assert_eq!(lines[1], "Дата на събитие: 14:30 15.01.2026");
        assert_eq!(lines[2], "Дължима сума: 10.00 EUR или 19.56 BGN");
        assert_eq!(lines[3], "Платено в евро: 15.00 EUR");
        assert_eq!(lines[4], "Платено в лева: 0.00 BGN");
        assert_eq!(lines[5], "---");
        assert_eq!(lines[6], "Ресто за получаване: 5.00 EUR");
    }

    #[test]
    fn test_list_line() {
        let line = list_line(&sample_item());
        assert!(line.starts_with("11111111-2222-3333-4444-555555555555  2026-01-15 14:30"));
        assert!(line.contains("change 5.00 EUR"));
        assert!(line.contains("due 10.00 EUR / 19.56 BGN"));
    }
}
