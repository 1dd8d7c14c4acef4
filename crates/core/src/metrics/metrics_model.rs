//! Holding metrics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display figures for one open lot at the current market price.
///
/// `cagr` is `None` when annualized return is not applicable (zero/negative
/// cost, same-day or future-dated lot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotMetrics {
    pub source_transaction_id: String,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    pub unrealized_gain: Decimal,
    pub cagr: Option<Decimal>,
}

/// Aggregate figures across all open lots of one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetrics {
    pub total_quantity: Decimal,
    pub total_cost_basis: Decimal,
    pub total_market_value: Decimal,
    pub total_unrealized_gain: Decimal,
    /// Cost-basis-weighted average of the per-lot CAGRs; `None` when no lot
    /// has an applicable CAGR.
    pub cagr: Option<Decimal>,
    pub lots: Vec<LotMetrics>,
}
