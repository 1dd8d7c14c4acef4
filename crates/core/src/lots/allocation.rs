//! Lot selection policies for satisfying a SELL.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{Result, ValidationError};
use crate::lots::lots_model::OpenLot;
use crate::transactions::LotAllocation;

/// How lots are chosen to satisfy a sell quantity.
///
/// `ImplicitFifo` is the fallback applied when the user made no explicit
/// choice; it shares the FIFO code path rather than being a special case so
/// all policies go through one greedy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationPolicy {
    ImplicitFifo,
    Fifo,
    Lifo,
    HighestCost,
}

/// Result of an allocation: the per-lot map plus the totals the UI needs to
/// surface "selected vs required" for a partial manual selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOutcome {
    pub allocations: LotAllocation,
    pub allocated_quantity: Decimal,
    pub target_quantity: Decimal,
}

impl AllocationOutcome {
    pub fn shortfall(&self) -> Decimal {
        self.target_quantity - self.allocated_quantity
    }

    pub fn is_fully_allocated(&self) -> bool {
        self.allocated_quantity == self.target_quantity
    }
}

/// Pure lot-selection strategy. Recomputing with the same lots and target
/// always yields the same allocation.
#[derive(Default, Debug, Clone)]
pub struct LotAllocationStrategy {}

impl LotAllocationStrategy {
    pub fn new() -> Self {
        LotAllocationStrategy {}
    }

    /// Greedily allocates `target_quantity` across the open lots under the
    /// given policy.
    ///
    /// Under-allocation is allowed (the inventory may simply not cover the
    /// target); the outcome carries both quantities so the caller can show
    /// the gap. A negative target is a programmer error.
    pub fn allocate(
        &self,
        policy: AllocationPolicy,
        lots: &[OpenLot],
        target_quantity: Decimal,
    ) -> Result<AllocationOutcome> {
        if target_quantity.is_sign_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "Target quantity must not be negative, got {}",
                target_quantity
            ))
            .into());
        }

        let mut ordered: Vec<&OpenLot> = lots
            .iter()
            .filter(|lot| lot.remaining_quantity > Decimal::ZERO)
            .collect();
        match policy {
            AllocationPolicy::ImplicitFifo | AllocationPolicy::Fifo => {
                ordered.sort_by_key(|lot| lot.acquisition_date);
            }
            AllocationPolicy::Lifo => {
                ordered.sort_by_key(|lot| std::cmp::Reverse(lot.acquisition_date));
            }
            AllocationPolicy::HighestCost => {
                // Stable sort keeps the incoming lot order for equal costs.
                ordered.sort_by_key(|lot| std::cmp::Reverse(lot.cost_per_unit));
            }
        }

        let mut allocations = LotAllocation::new();
        let mut remaining_target = target_quantity;
        for lot in ordered {
            if remaining_target <= Decimal::ZERO {
                break;
            }
            let take = remaining_target.min(lot.remaining_quantity);
            allocations.insert(lot.source_transaction_id.clone(), take);
            remaining_target -= take;
        }

        let allocated_quantity = allocations.total();
        Ok(AllocationOutcome {
            allocations,
            allocated_quantity,
            target_quantity,
        })
    }

    /// Manual mode: the caller supplies per-lot quantities and the strategy
    /// only validates.
    ///
    /// Over-allocating a lot or exceeding the target is a validation error
    /// caught before submission; under-allocation is a valid partial
    /// selection surfaced through the outcome.
    pub fn validate_manual(
        &self,
        lots: &[OpenLot],
        requested: &HashMap<String, Decimal>,
        target_quantity: Decimal,
    ) -> Result<AllocationOutcome> {
        if target_quantity.is_sign_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "Target quantity must not be negative, got {}",
                target_quantity
            ))
            .into());
        }

        let by_id: HashMap<&str, &OpenLot> = lots
            .iter()
            .map(|lot| (lot.source_transaction_id.as_str(), lot))
            .collect();

        let mut allocations = LotAllocation::new();
        for (lot_id, quantity) in requested {
            if quantity.is_sign_negative() {
                return Err(ValidationError::InvalidInput(format!(
                    "Allocation for lot {} must not be negative, got {}",
                    lot_id, quantity
                ))
                .into());
            }
            if quantity.is_zero() {
                continue;
            }
            let lot = by_id.get(lot_id.as_str()).ok_or_else(|| {
                ValidationError::InvalidInput(format!("Unknown lot: {}", lot_id))
            })?;
            if *quantity > lot.remaining_quantity {
                return Err(ValidationError::LotOverAllocated {
                    lot_id: lot_id.clone(),
                    requested: *quantity,
                    remaining: lot.remaining_quantity,
                }
                .into());
            }
            allocations.insert(lot_id.clone(), *quantity);
        }

        let allocated_quantity = allocations.total();
        if allocated_quantity > target_quantity {
            return Err(ValidationError::InvalidInput(format!(
                "Allocated quantity {} exceeds target quantity {}",
                allocated_quantity, target_quantity
            ))
            .into());
        }

        Ok(AllocationOutcome {
            allocations,
            allocated_quantity,
            target_quantity,
        })
    }
}
