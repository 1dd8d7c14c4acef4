//! FX resolution models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a resolved rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FxRateSource {
    /// From and to currency are the same; no lookup was made.
    SameCurrency,
    /// Fetched from the upstream rate provider.
    Provider,
    /// Upstream lookup failed; the rate degraded to 1 and the user may edit
    /// it before submitting.
    Fallback,
    /// Explicit user-entered rate; wins over anything fetched.
    Override,
}

/// A resolved historical conversion rate for one (from, to, date) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxResolution {
    pub rate: Decimal,
    pub source: FxRateSource,
}

impl FxResolution {
    /// A cross-currency transaction must always be completable; fallback
    /// rates are flagged so the form can offer manual entry instead of
    /// erroring out.
    pub fn is_user_editable(&self) -> bool {
        self.source == FxRateSource::Fallback
    }
}

/// Memoization key for one form session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FxKey {
    pub from_currency: String,
    pub to_currency: String,
    pub date: NaiveDate,
}

impl FxKey {
    pub fn new(from_currency: &str, to_currency: &str, date: NaiveDate) -> Self {
        Self {
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            date,
        }
    }
}
