//! Core error types for the Lotfolio application.
//!
//! This module defines transport-agnostic error types. Backend-specific
//! errors (HTTP status codes, serde failures) are converted to these types
//! by the `ledger-client` crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lot calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Asset operation failed: {0}")]
    Asset(String),

    /// A backend write or read was rejected. The message is surfaced to the
    /// user verbatim; no local retry is attempted.
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors that occur during lot inventory and allocation calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid transaction data: {0}")]
    InvalidTransaction(String),

    #[error("Unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),

    #[error("Lot not found during allocation: {lot_id}")]
    LotNotFound { lot_id: String },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input.
///
/// These are caught before submission and shown inline; they are never sent
/// to the backend.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error(
        "Allocation of {requested} exceeds remaining quantity {remaining} for lot {lot_id}"
    )]
    LotOverAllocated {
        lot_id: String,
        requested: rust_decimal::Decimal,
        remaining: rust_decimal::Decimal,
    },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
