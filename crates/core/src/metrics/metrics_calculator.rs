//! Per-lot and aggregate cost, value, and annualized-return figures.

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, MathematicalOps};
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::DAYS_PER_YEAR;
use crate::lots::OpenLot;
use crate::metrics::metrics_model::{HoldingMetrics, LotMetrics};

/// Source of "today" for holding-period math, injected so the calculator
/// stays deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used in production.
#[derive(Default, Debug, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Computes display metrics for open lots at the current market price.
#[derive(Clone)]
pub struct HoldingMetricsCalculator {
    clock: Arc<dyn Clock>,
}

impl Default for HoldingMetricsCalculator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl HoldingMetricsCalculator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Cost basis, market value, and CAGR for one lot.
    pub fn compute_lot_metrics(&self, lot: &OpenLot, current_price: Decimal) -> LotMetrics {
        let cost_basis = lot.remaining_quantity * lot.cost_per_unit;
        let market_value = lot.remaining_quantity * current_price;
        LotMetrics {
            source_transaction_id: lot.source_transaction_id.clone(),
            cost_basis,
            market_value,
            unrealized_gain: market_value - cost_basis,
            cagr: self.compute_cagr(lot, current_price),
        }
    }

    /// Aggregates cost, value, and a cost-weighted CAGR across the open
    /// lots of one holding.
    pub fn compute_holding_metrics(
        &self,
        lots: &[OpenLot],
        current_price: Decimal,
    ) -> HoldingMetrics {
        let lot_metrics: Vec<LotMetrics> = lots
            .iter()
            .map(|lot| self.compute_lot_metrics(lot, current_price))
            .collect();

        let total_quantity = lots.iter().map(|lot| lot.remaining_quantity).sum();
        let total_cost_basis = lot_metrics.iter().map(|m| m.cost_basis).sum();
        let total_market_value = lot_metrics.iter().map(|m| m.market_value).sum();
        let total_unrealized_gain: Decimal =
            lot_metrics.iter().map(|m| m.unrealized_gain).sum();

        let mut weighted_cagr = Decimal::ZERO;
        let mut weight_total = Decimal::ZERO;
        for metrics in &lot_metrics {
            if let Some(cagr) = metrics.cagr {
                weighted_cagr += cagr * metrics.cost_basis;
                weight_total += metrics.cost_basis;
            }
        }
        let cagr = if weight_total > Decimal::ZERO {
            Some(weighted_cagr / weight_total)
        } else {
            None
        };

        HoldingMetrics {
            total_quantity,
            total_cost_basis,
            total_market_value,
            total_unrealized_gain,
            cagr,
            lots: lot_metrics,
        }
    }

    /// `(price / cost) ^ (1 / years) - 1` with `years = days / 365.25`.
    ///
    /// Not applicable (None) for non-positive cost, a same-day or
    /// future-dated lot, or a non-positive price.
    fn compute_cagr(&self, lot: &OpenLot, current_price: Decimal) -> Option<Decimal> {
        if lot.cost_per_unit <= Decimal::ZERO || current_price <= Decimal::ZERO {
            return None;
        }

        let days_held = (self.clock.today() - lot.acquisition_date).num_days();
        if days_held <= 0 {
            return None;
        }

        let days_per_year =
            Decimal::from_str(DAYS_PER_YEAR).unwrap_or_else(|_| Decimal::new(36525, 2));
        let years = Decimal::from(days_held) / days_per_year;
        let growth = current_price / lot.cost_per_unit;

        growth
            .checked_powd(Decimal::ONE / years)
            .map(|annualized| annualized - Decimal::ONE)
    }
}
