use thiserror::Error;

/// Errors specific to FX rate resolution.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Failed to fetch exchange rate: {0}")]
    FetchError(String),

    #[error("Exchange rate not found for {0}/{1}")]
    RateNotFound(String, String),
}
