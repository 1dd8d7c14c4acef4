//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::transactions::transactions_constants::*;

/// Immutable-once-committed ledger entry.
///
/// `quantity` and `price_per_unit` are overloaded for some types (cash
/// amounts for DIVIDEND/COUPON, ratio units for SPLIT/BONUS); the
/// `CorporateActionIntent` enum is the typed view of those conventions and
/// this struct is the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub asset_id: String,
    pub transaction_type: String,
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub price_per_unit: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    pub currency: String,
    /// Open map for type-specific payload: fxRate, newAssetTicker,
    /// costAllocationPercent, links.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Transaction {
    /// Get a typed value out of the open `details` map.
    pub fn get_detail<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.details
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Historical FX rate attached to a cross-currency leg, if any.
    pub fn fx_rate(&self) -> Option<Decimal> {
        self.get_detail(DETAILS_KEY_FX_RATE)
    }

    /// Explicit lot allocation carried by a historical SELL, if any.
    pub fn lot_allocation(&self) -> Option<LotAllocation> {
        self.get_detail(DETAILS_KEY_LINKS)
    }

    /// New asset ticker for MERGER/DEMERGER/RENAME entries.
    pub fn new_asset_ticker(&self) -> Option<String> {
        self.get_detail(DETAILS_KEY_NEW_ASSET_TICKER)
    }

    /// Demerger cost allocation percentage.
    pub fn cost_allocation_percent(&self) -> Option<Decimal> {
        self.get_detail(DETAILS_KEY_COST_ALLOCATION_PERCENT)
    }
}

/// Explicit lot selection attached to a SELL request.
///
/// Maps the id of the opening BUY transaction to the quantity consumed from
/// that lot. Before submission the quantities must sum to the sell quantity
/// and each entry must not exceed the lot's remaining quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotAllocation {
    pub entries: HashMap<String, Decimal>,
}

impl LotAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, buy_transaction_id: impl Into<String>, quantity: Decimal) {
        self.entries.insert(buy_transaction_id.into(), quantity);
    }

    pub fn get(&self, buy_transaction_id: &str) -> Option<Decimal> {
        self.entries.get(buy_transaction_id).copied()
    }

    pub fn total(&self) -> Decimal {
        self.entries.values().copied().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for LotAllocation {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub asset_id: String,
    pub transaction_type: String,
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub price_per_unit: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    pub currency: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Explicit lot allocation for a SELL; serialized as the `links` field
    /// of the POST payload.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LotAllocation>,
}

impl NewTransaction {
    /// Validates the new transaction data before it is allowed anywhere near
    /// the backend.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.asset_id.trim().is_empty() {
            return Err(ValidationError::MissingField("assetId".to_string()));
        }
        if TransactionType::from_str(&self.transaction_type).is_err() {
            return Err(ValidationError::InvalidInput(format!(
                "Unknown transaction type: {}",
                self.transaction_type
            )));
        }
        if self.quantity.is_sign_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "Quantity must not be negative, got {}",
                self.quantity
            )));
        }
        if self.fees.is_sign_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "Fees must not be negative, got {}",
                self.fees
            )));
        }
        if let Some(links) = &self.links {
            if self.transaction_type != TRANSACTION_TYPE_SELL {
                return Err(ValidationError::InvalidInput(
                    "Lot allocation links are only valid on a SELL".to_string(),
                ));
            }
            if links.total() != self.quantity {
                return Err(ValidationError::InvalidInput(format!(
                    "Allocated quantity {} does not match sell quantity {}",
                    links.total(),
                    self.quantity
                )));
            }
            if let Some((lot_id, qty)) = links
                .entries
                .iter()
                .find(|(_, qty)| **qty <= Decimal::ZERO)
            {
                return Err(ValidationError::InvalidInput(format!(
                    "Allocation for lot {} must be positive, got {}",
                    lot_id, qty
                )));
            }
        }
        Ok(())
    }
}

/// Enum representing the supported transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Split,
    Bonus,
    Merger,
    Demerger,
    Rename,
    Contribution,
    Coupon,
    InterestCredit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
            TransactionType::Dividend => TRANSACTION_TYPE_DIVIDEND,
            TransactionType::Split => TRANSACTION_TYPE_SPLIT,
            TransactionType::Bonus => TRANSACTION_TYPE_BONUS,
            TransactionType::Merger => TRANSACTION_TYPE_MERGER,
            TransactionType::Demerger => TRANSACTION_TYPE_DEMERGER,
            TransactionType::Rename => TRANSACTION_TYPE_RENAME,
            TransactionType::Contribution => TRANSACTION_TYPE_CONTRIBUTION,
            TransactionType::Coupon => TRANSACTION_TYPE_COUPON,
            TransactionType::InterestCredit => TRANSACTION_TYPE_INTEREST_CREDIT,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            s if s == TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            s if s == TRANSACTION_TYPE_DIVIDEND => Ok(TransactionType::Dividend),
            s if s == TRANSACTION_TYPE_SPLIT => Ok(TransactionType::Split),
            s if s == TRANSACTION_TYPE_BONUS => Ok(TransactionType::Bonus),
            s if s == TRANSACTION_TYPE_MERGER => Ok(TransactionType::Merger),
            s if s == TRANSACTION_TYPE_DEMERGER => Ok(TransactionType::Demerger),
            s if s == TRANSACTION_TYPE_RENAME => Ok(TransactionType::Rename),
            s if s == TRANSACTION_TYPE_CONTRIBUTION => Ok(TransactionType::Contribution),
            s if s == TRANSACTION_TYPE_COUPON => Ok(TransactionType::Coupon),
            s if s == TRANSACTION_TYPE_INTEREST_CREDIT => Ok(TransactionType::InterestCredit),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}
