//! Historical FX rate resolution with session memoization and user
//! overrides.

use dashmap::DashMap;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::errors::Result;
use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::{FxKey, FxRateSource, FxResolution};
use crate::fx::fx_traits::FxRateProviderTrait;

/// Resolves a historical conversion rate for a (foreign currency, home
/// currency, date) triple.
///
/// Results are memoized per key for the lifetime of one form session. An
/// upstream failure never fails the operation: the rate degrades to 1 and is
/// flagged user-editable. An explicit user override wins over fetched rates
/// until the key changes or the override is cleared.
#[derive(Clone)]
pub struct FxConversionResolver {
    provider: Arc<dyn FxRateProviderTrait>,
    cache: Arc<DashMap<FxKey, Decimal>>,
    override_rate: Arc<RwLock<Option<(FxKey, Decimal)>>>,
}

impl FxConversionResolver {
    pub fn new(provider: Arc<dyn FxRateProviderTrait>) -> Self {
        Self {
            provider,
            cache: Arc::new(DashMap::new()),
            override_rate: Arc::new(RwLock::new(None)),
        }
    }

    /// Resolves the rate for one (from, to, date) triple.
    pub async fn resolve(
        &self,
        from_currency: &str,
        to_currency: &str,
        date: NaiveDate,
    ) -> FxResolution {
        if from_currency == to_currency {
            return FxResolution {
                rate: Decimal::ONE,
                source: FxRateSource::SameCurrency,
            };
        }

        let key = FxKey::new(from_currency, to_currency, date);

        if let Some(rate) = self.current_override(&key) {
            return FxResolution {
                rate,
                source: FxRateSource::Override,
            };
        }

        if let Some(rate) = self.cache.get(&key) {
            return FxResolution {
                rate: *rate,
                source: FxRateSource::Provider,
            };
        }

        match self.provider.fx_rate(from_currency, to_currency, date).await {
            Ok(rate) => {
                self.cache.insert(key, rate);
                FxResolution {
                    rate,
                    source: FxRateSource::Provider,
                }
            }
            Err(e) => {
                // Failed lookups are not cached so the next resolve gets a
                // fresh attempt.
                warn!(
                    "FX lookup {}/{} on {} failed: {}. Falling back to rate 1 (user-editable)",
                    from_currency, to_currency, date, e
                );
                FxResolution {
                    rate: Decimal::ONE,
                    source: FxRateSource::Fallback,
                }
            }
        }
    }

    /// Converts an amount using the resolved rate.
    pub async fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
        date: NaiveDate,
    ) -> Decimal {
        let resolution = self.resolve(from_currency, to_currency, date).await;
        amount * resolution.rate
    }

    /// Pins a user-entered rate for one (from, to, date) key. It takes
    /// precedence over fetched and cached rates until the key changes or
    /// `clear_override` runs.
    pub fn set_override(
        &self,
        from_currency: &str,
        to_currency: &str,
        date: NaiveDate,
        rate: Decimal,
    ) -> Result<()> {
        if rate <= Decimal::ZERO {
            return Err(FxError::FetchError(format!(
                "Override rate must be positive, got {}",
                rate
            ))
            .into());
        }
        let key = FxKey::new(from_currency, to_currency, date);
        debug!(
            "Overriding FX rate {}/{} on {} with {}",
            from_currency, to_currency, date, rate
        );
        let mut guard = self
            .override_rate
            .write()
            .map_err(|e| FxError::FetchError(e.to_string()))?;
        *guard = Some((key, rate));
        Ok(())
    }

    /// Clears the user override. Called when the asset or date changes so a
    /// fresh fetch is attempted.
    pub fn clear_override(&self) {
        if let Ok(mut guard) = self.override_rate.write() {
            *guard = None;
        }
    }

    fn current_override(&self, key: &FxKey) -> Option<Decimal> {
        let guard = self.override_rate.read().ok()?;
        match &*guard {
            // An override only applies to the exact key it was entered for;
            // a different asset currency or date ignores it.
            Some((override_key, rate)) if override_key == key => Some(*rate),
            _ => None,
        }
    }
}
