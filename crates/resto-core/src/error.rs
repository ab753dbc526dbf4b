//! # Error Types
//!
//! Domain error types for resto-core.
//!
//! The calculation core is deliberately infallible: reconciliation and
//! decomposition accept any input and degrade rather than error (garbage
//! input becomes zero, unsplittable residue is dropped). The only fallible
//! surface is the *strict* amount parser used by typed entry points such as
//! CLI arguments.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Errors from the strict amount parser ([`crate::Amount`]'s `FromStr`).
///
/// Raw free-form input (the mobile app's text fields) goes through
/// [`crate::Amount::parse_lenient`] instead, which never fails.
#[derive(Debug, Error)]
pub enum AmountParseError {
    /// Input was empty or whitespace only.
    #[error("amount is empty")]
    Empty,

    /// Input did not parse as a decimal number.
    #[error("'{input}' is not a valid amount")]
    Malformed { input: String },

    /// Negative amounts cannot be entered.
    #[error("'{input}' is negative; amounts must be zero or positive")]
    Negative { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AmountParseError::Malformed {
            input: "12x".to_string(),
        };
        assert_eq!(err.to_string(), "'12x' is not a valid amount");

        let err = AmountParseError::Negative {
            input: "-4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'-4' is negative; amounts must be zero or positive"
        );
    }
}
