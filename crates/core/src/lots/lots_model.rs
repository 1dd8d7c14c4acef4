//! Open-lot view models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::QUANTITY_THRESHOLD;

/// Returns true when a quantity is large enough to keep a lot open.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold = Decimal::from_str(QUANTITY_THRESHOLD).unwrap_or_default();
    quantity.abs() >= threshold
}

/// A still-open acquisition lot, derived from the transaction history.
///
/// Computed fresh on every read and never persisted; the view that requested
/// it owns it transiently and discards it after render/submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenLot {
    /// Id of the opening BUY (or bonus/corporate-action leg) transaction.
    pub source_transaction_id: String,
    pub acquisition_date: NaiveDate,
    pub original_quantity: Decimal,
    pub remaining_quantity: Decimal,
    /// Cost per unit in the home currency.
    pub cost_per_unit: Decimal,
}

impl OpenLot {
    pub fn cost_basis(&self) -> Decimal {
        self.remaining_quantity * self.cost_per_unit
    }
}

/// Server-computed open-lot row from `GET availableLots`.
///
/// Used directly by the allocation strategy when the backend is authoritative
/// for available quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerLot {
    pub id: String,
    pub date: NaiveDate,
    pub available_quantity: Decimal,
    pub price_per_unit: Decimal,
}

impl From<ServerLot> for OpenLot {
    fn from(lot: ServerLot) -> Self {
        OpenLot {
            source_transaction_id: lot.id,
            acquisition_date: lot.date,
            original_quantity: lot.available_quantity,
            remaining_quantity: lot.available_quantity,
            cost_per_unit: lot.price_per_unit,
        }
    }
}
