//! Corporate action intent models.
//!
//! The wire format overloads `quantity`/`pricePerUnit` per transaction type
//! (cash amounts, ratio units). These models carry the named fields instead;
//! the synthesizer serializes to the overloaded shape only at the boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference to the asset a corporate action transforms the holding into.
///
/// The id must be pre-resolved (ticker lookup, lazy creation) before
/// synthesis; the synthesizer itself makes no network calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetRef {
    pub ticker: String,
    pub asset_id: Option<String>,
}

/// Ephemeral form state describing one user-entered corporate action.
/// Never persisted; translated into primitive transactions before
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateActionIntent {
    /// Asset the action applies to.
    pub asset_id: String,
    /// Effective date of the action; every synthesized transaction carries
    /// it so holding-period continuity survives.
    pub date: NaiveDate,
    /// Currency of the underlying asset.
    pub currency: String,
    /// Historical rate to the home currency when the asset currency differs;
    /// inherited by every synthesized transaction.
    pub fx_rate: Option<Decimal>,
    pub action: CorporateAction,
}

/// The supported corporate action kinds, with named numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorporateAction {
    /// Cash dividend paid out.
    CashDividend { cash_amount: Decimal },
    /// Dividend reinvested into the same asset (DRIP).
    ReinvestedDividend {
        cash_amount: Decimal,
        reinvestment_price: Decimal,
    },
    /// `ratio_new` for `ratio_old` stock split (2-for-1 => new 2, old 1).
    Split {
        ratio_new: Decimal,
        ratio_old: Decimal,
    },
    /// `ratio_new` bonus shares per `ratio_old` held.
    Bonus {
        ratio_new: Decimal,
        ratio_old: Decimal,
    },
    /// Holding converts into `new_asset` at `conversion_ratio` units per
    /// held unit; cost basis carries over proportionally on the backend.
    Merger {
        conversion_ratio: Decimal,
        new_asset: NewAssetRef,
    },
    /// Spin-off of `new_asset` at `ratio` units per held unit;
    /// `cost_allocation_percent` of original cost basis moves with it.
    Demerger {
        ratio: Decimal,
        new_asset: NewAssetRef,
        cost_allocation_percent: Decimal,
    },
    /// Ticker rename; nothing numeric changes.
    Rename { new_asset: NewAssetRef },
    /// Bond coupon payment.
    Coupon { cash_amount: Decimal },
}

impl CorporateAction {
    /// The new-asset reference required by this action, if any.
    pub fn new_asset(&self) -> Option<&NewAssetRef> {
        match self {
            CorporateAction::Merger { new_asset, .. }
            | CorporateAction::Demerger { new_asset, .. }
            | CorporateAction::Rename { new_asset } => Some(new_asset),
            _ => None,
        }
    }
}
