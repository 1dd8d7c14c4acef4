//! Maps one corporate-action intent into the ordered list of primitive
//! ledger transactions the backend can apply.

use log::debug;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::corporate_actions::actions_model::{
    CorporateAction, CorporateActionIntent, NewAssetRef,
};
use crate::errors::{Result, ValidationError};
use crate::transactions::*;

/// Deterministic, side-effect-free translation of a corporate-action intent
/// into primitive transactions.
///
/// The only external datum it relies on is the pre-resolved new-asset id,
/// which must already be present in the intent; synthesis refuses to proceed
/// without it rather than producing a partial batch.
#[derive(Default, Debug, Clone)]
pub struct CorporateActionSynthesizer {}

impl CorporateActionSynthesizer {
    pub fn new() -> Self {
        CorporateActionSynthesizer {}
    }

    pub fn synthesize(&self, intent: &CorporateActionIntent) -> Result<Vec<NewTransaction>> {
        let drafts = match &intent.action {
            CorporateAction::CashDividend { cash_amount } => {
                Self::require_positive(*cash_amount, "cashAmount")?;
                vec![self.cash_draft(intent, TRANSACTION_TYPE_DIVIDEND, *cash_amount)]
            }
            CorporateAction::ReinvestedDividend {
                cash_amount,
                reinvestment_price,
            } => {
                Self::require_positive(*cash_amount, "cashAmount")?;
                Self::require_positive(*reinvestment_price, "reinvestmentPrice")?;
                // The dividend comes first; the same-dated BUY makes the
                // reinvestment attributable to it.
                vec![
                    self.cash_draft(intent, TRANSACTION_TYPE_DIVIDEND, *cash_amount),
                    self.draft(
                        intent,
                        TRANSACTION_TYPE_BUY,
                        *cash_amount / *reinvestment_price,
                        *reinvestment_price,
                        Map::new(),
                    ),
                ]
            }
            CorporateAction::Split {
                ratio_new,
                ratio_old,
            } => {
                Self::require_positive(*ratio_new, "ratioNew")?;
                Self::require_positive(*ratio_old, "ratioOld")?;
                // Ratio travels in the quantity/price pair, not as a price.
                vec![self.draft(
                    intent,
                    TRANSACTION_TYPE_SPLIT,
                    *ratio_new,
                    *ratio_old,
                    Map::new(),
                )]
            }
            CorporateAction::Bonus {
                ratio_new,
                ratio_old,
            } => {
                Self::require_positive(*ratio_new, "ratioNew")?;
                Self::require_positive(*ratio_old, "ratioOld")?;
                vec![self.draft(
                    intent,
                    TRANSACTION_TYPE_BONUS,
                    *ratio_new,
                    *ratio_old,
                    Map::new(),
                )]
            }
            CorporateAction::Merger {
                conversion_ratio,
                new_asset,
            } => {
                Self::require_positive(*conversion_ratio, "conversionRatio")?;
                let details = Self::new_asset_details(new_asset)?;
                vec![self.draft(
                    intent,
                    TRANSACTION_TYPE_MERGER,
                    *conversion_ratio,
                    Decimal::ONE,
                    details,
                )]
            }
            CorporateAction::Demerger {
                ratio,
                new_asset,
                cost_allocation_percent,
            } => {
                Self::require_positive(*ratio, "ratio")?;
                if cost_allocation_percent.is_sign_negative()
                    || *cost_allocation_percent > Decimal::ONE_HUNDRED
                {
                    return Err(ValidationError::InvalidInput(format!(
                        "costAllocationPercent must be within [0, 100], got {}",
                        cost_allocation_percent
                    ))
                    .into());
                }
                let mut details = Self::new_asset_details(new_asset)?;
                details.insert(
                    DETAILS_KEY_COST_ALLOCATION_PERCENT.to_string(),
                    json!(cost_allocation_percent),
                );
                vec![self.draft(intent, TRANSACTION_TYPE_DEMERGER, *ratio, Decimal::ONE, details)]
            }
            CorporateAction::Rename { new_asset } => {
                let details = Self::new_asset_details(new_asset)?;
                // Placeholders; holding period and cost basis pass through.
                vec![self.draft(
                    intent,
                    TRANSACTION_TYPE_RENAME,
                    Decimal::ONE,
                    Decimal::ONE,
                    details,
                )]
            }
            CorporateAction::Coupon { cash_amount } => {
                Self::require_positive(*cash_amount, "cashAmount")?;
                vec![self.cash_draft(intent, TRANSACTION_TYPE_COUPON, *cash_amount)]
            }
        };

        debug!(
            "Synthesized {} transaction(s) for {} on {}",
            drafts.len(),
            intent.asset_id,
            intent.date
        );
        Ok(drafts)
    }

    /// Cash amounts ride in the quantity field with price 1; the backend
    /// expects the same convention.
    fn cash_draft(
        &self,
        intent: &CorporateActionIntent,
        transaction_type: &str,
        cash_amount: Decimal,
    ) -> NewTransaction {
        self.draft(intent, transaction_type, cash_amount, Decimal::ONE, Map::new())
    }

    fn draft(
        &self,
        intent: &CorporateActionIntent,
        transaction_type: &str,
        quantity: Decimal,
        price_per_unit: Decimal,
        mut details: Map<String, Value>,
    ) -> NewTransaction {
        if let Some(fx_rate) = intent.fx_rate {
            details.insert(DETAILS_KEY_FX_RATE.to_string(), json!(fx_rate));
        }
        NewTransaction {
            id: Some(Uuid::new_v4().to_string()),
            asset_id: intent.asset_id.clone(),
            transaction_type: transaction_type.to_string(),
            date: intent.date,
            quantity,
            price_per_unit,
            fees: Decimal::ZERO,
            currency: intent.currency.clone(),
            details: if details.is_empty() {
                None
            } else {
                Some(Value::Object(details))
            },
            links: None,
        }
    }

    fn new_asset_details(new_asset: &NewAssetRef) -> Result<Map<String, Value>> {
        if new_asset.ticker.trim().is_empty() {
            return Err(ValidationError::MissingField("newAssetTicker".to_string()).into());
        }
        let asset_id = new_asset
            .asset_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ValidationError::MissingField("newAssetId".to_string()))?;

        let mut details = Map::new();
        details.insert(
            DETAILS_KEY_NEW_ASSET_TICKER.to_string(),
            json!(new_asset.ticker),
        );
        details.insert(DETAILS_KEY_NEW_ASSET_ID.to_string(), json!(asset_id));
        Ok(details)
    }

    fn require_positive(value: Decimal, field: &str) -> Result<()> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "{} must be positive, got {}",
                field, value
            ))
            .into());
        }
        Ok(())
    }
}
