use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Trait defining the contract for the upstream historical-rate lookup
/// (`GET fxRate(from, to, date)` on the backend).
#[async_trait]
pub trait FxRateProviderTrait: Send + Sync {
    /// Single historical rate converting one unit of `from_currency` into
    /// `to_currency` on the given date.
    async fn fx_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        date: NaiveDate,
    ) -> Result<Decimal>;
}
