//! Application-level errors.
//!
//! Everything a command can fail with, folded into one enum so `main` has a
//! single exit path. Storage failures on the *record* path are deliberately
//! not routed through here - a broken database must never block a
//! calculation, so those are logged and swallowed at the call site.

use thiserror::Error;

use resto_core::AmountParseError;
use resto_db::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid amount: {0}")]
    Amount(#[from] AmountParseError),

    #[error("{0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidInput("nothing to change".into());
        assert_eq!(err.to_string(), "nothing to change");

        let err: AppError = AmountParseError::Empty.into();
        assert!(err.to_string().starts_with("invalid amount:"));
    }
}
