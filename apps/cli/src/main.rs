//! # RestoCalc CLI
//!
//! Command-line front end for the dual-currency (BGN/EUR) change
//! calculator.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  resto-cli (this crate)                                             │
//! │    argument parsing, rendering, location timeout                    │
//! │         │                                                           │
//! │         ├──► resto-core   pure calculation (no I/O)                 │
//! │         │                                                           │
//! │         └──► resto-db     settings + history on SQLite              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use resto_db::{Store, StoreConfig};

mod commands;
mod error;
mod location;

use error::AppError;

#[derive(Debug, Parser)]
#[command(name = "resto-cli", version, about = "Dual-currency (BGN/EUR) change calculator")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(
        long,
        global = true,
        env = "RESTOCALC_DB",
        default_value = "restocalc.db",
        value_name = "PATH"
    )]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reconcile a dual-currency payment and show the change
    Calc(commands::calc::CalcArgs),

    /// Split an amount into notes and coins
    Breakdown(commands::breakdown::BreakdownArgs),

    /// Inspect and manage the calculation history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },

    /// Show or change application settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let store = Store::open(StoreConfig::new(&cli.db)).await?;

    let outcome = match cli.command {
        Command::Calc(args) => commands::calc::run(&store, args).await,
        Command::Breakdown(args) => commands::breakdown::run(args),
        Command::History { action } => commands::history::run(&store, action).await,
        Command::Settings { action } => commands::settings::run(&store, action).await,
    };

    store.close().await;
    outcome
}

// =============================================================================
// Unit Tests
// =============================================================================
