//! Subcommand implementations.
//!
//! Each module owns one subcommand: its clap argument struct, the `run`
//! function, and the rendering helpers (kept as string builders so tests
//! can assert on output without capturing stdout).

pub mod breakdown;
pub mod calc;
pub mod history;
pub mod settings;

use clap::ValueEnum;

use resto_core::Currency;

/// Currency choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurrencyArg {
    Eur,
    Bgn,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Eur => Currency::Eur,
            CurrencyArg::Bgn => Currency::Bgn,
        }
    }
}
