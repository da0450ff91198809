//! # Amount Validation
//!
//! Validates the raw amount text a user types during receipt capture. The
//! validator is pure: it touches no storage and holds no state, so capture
//! surfaces can run it on every keystroke before any record exists.
//!
//! Parsing follows the locale-neutral decimal-point convention. Currency
//! symbols, grouping separators and exponent notation are all rejected
//! rather than cleaned up, so what the user confirms is exactly what the
//! store records.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Why a raw amount string was rejected.
///
/// Exactly one of these is produced per rejected input, checked in order:
/// emptiness first, then parseability, then sign.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    #[error("Amount cannot be empty")]
    EmptyInput,

    #[error("Amount '{0}' is not a decimal number")]
    NotANumber(String),

    #[error("Amount must be greater than zero")]
    NonPositive,
}

/// Validate raw text as a positive decimal claim amount.
///
/// Surrounding whitespace is trimmed before any check. The returned value
/// keeps the precision the user entered: "12.50" stays two decimal places,
/// it does not collapse to "12.5".
pub fn validate_amount(raw: &str) -> Result<Decimal, AmountError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AmountError::EmptyInput);
    }

    let amount = Decimal::from_str(trimmed)
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(AmountError::NonPositive);
    }

    Ok(amount)
}
