//! Reconstructs the open-lot inventory for one asset from its flat
//! transaction history.

use log::{debug, warn};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::lots::lots_model::{is_quantity_significant, OpenLot};
use crate::transactions::{Transaction, TransactionType};

/// Mutable lot state used during the chronological walk.
struct LotState {
    source_transaction_id: String,
    acquisition_date: chrono::NaiveDate,
    original_quantity: Decimal,
    remaining_quantity: Decimal,
    cost_per_unit: Decimal,
}

/// Rebuilds the ordered sequence of still-open acquisition lots and their
/// remaining quantities from an unordered transaction history.
///
/// The builder is a best-effort client-side view; the backend remains the
/// source of truth for strict validation. It therefore never fails on an
/// inconsistent history (e.g. more sold than bought) and instead caps
/// consumption at the available quantity.
#[derive(Default, Debug, Clone)]
pub struct LotInventoryBuilder {}

impl LotInventoryBuilder {
    pub fn new() -> Self {
        LotInventoryBuilder {}
    }

    /// Computes the open lots for one asset.
    ///
    /// Transactions are sorted by date ascending with a stable tie-break on
    /// their original order, so same-day entries resolve in insertion order.
    /// BUY opens a lot; SELL consumes lots (explicit `links` allocation when
    /// present, default FIFO otherwise); SPLIT rescales open lots; BONUS
    /// appends a zero-cost lot; MERGER closes the holding. Cash-only types
    /// do not touch the inventory.
    pub fn build_open_lots(&self, transactions: &[Transaction]) -> Vec<OpenLot> {
        debug!(
            "Building open lots from {} transactions",
            transactions.len()
        );

        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        // Stable sort keeps insertion order within one day.
        ordered.sort_by_key(|tx| tx.date);

        let mut lots: Vec<LotState> = Vec::new();
        // Sold quantity that predates any lot able to absorb it. A later buy
        // is consumed on arrival until this drains, which reproduces the
        // aggregate default-FIFO consumption over the whole history.
        let mut pending_sold = Decimal::ZERO;

        for tx in ordered {
            let transaction_type = match TransactionType::from_str(&tx.transaction_type) {
                Ok(t) => t,
                Err(_) => {
                    warn!(
                        "Skipping transaction {} with unknown type {}",
                        tx.id, tx.transaction_type
                    );
                    continue;
                }
            };

            match transaction_type {
                TransactionType::Buy => {
                    if tx.quantity <= Decimal::ZERO || tx.price_per_unit <= Decimal::ZERO {
                        debug!(
                            "Excluding zero-quantity/zero-price buy {} from the open set",
                            tx.id
                        );
                        continue;
                    }
                    let mut lot = LotState {
                        source_transaction_id: tx.id.clone(),
                        acquisition_date: tx.date,
                        original_quantity: tx.quantity,
                        remaining_quantity: tx.quantity,
                        cost_per_unit: tx.price_per_unit,
                    };
                    if pending_sold > Decimal::ZERO {
                        let consumed = pending_sold.min(lot.remaining_quantity);
                        lot.remaining_quantity -= consumed;
                        pending_sold -= consumed;
                    }
                    lots.push(lot);
                }
                TransactionType::Sell => {
                    match tx.lot_allocation() {
                        Some(allocation) if !allocation.is_empty() => {
                            Self::consume_allocated(&mut lots, tx, &allocation);
                        }
                        _ => {
                            pending_sold += Self::consume_fifo(&mut lots, tx.quantity);
                        }
                    }
                }
                TransactionType::Split => {
                    Self::apply_split(&mut lots, tx);
                }
                TransactionType::Bonus => {
                    Self::apply_bonus(&mut lots, tx);
                }
                TransactionType::Merger => {
                    debug!(
                        "Merger {} closes the holding; dropping {} open lots",
                        tx.id,
                        lots.len()
                    );
                    lots.clear();
                    pending_sold = Decimal::ZERO;
                }
                // Demerger and rename keep quantities; cost reallocation and
                // identity changes happen server-side.
                TransactionType::Demerger
                | TransactionType::Rename
                | TransactionType::Dividend
                | TransactionType::Contribution
                | TransactionType::Coupon
                | TransactionType::InterestCredit => {}
            }
        }

        if pending_sold > Decimal::ZERO && is_quantity_significant(&pending_sold) {
            warn!(
                "Transaction history is oversold by {}; consumption capped at available quantity",
                pending_sold
            );
        }

        lots.into_iter()
            .filter(|lot| is_quantity_significant(&lot.remaining_quantity))
            .map(|lot| OpenLot {
                source_transaction_id: lot.source_transaction_id,
                acquisition_date: lot.acquisition_date,
                original_quantity: lot.original_quantity,
                remaining_quantity: lot.remaining_quantity,
                cost_per_unit: lot.cost_per_unit,
            })
            .collect()
    }

    /// Default consumption: drain lots in acquisition order. Returns the
    /// quantity that could not be absorbed by any open lot.
    fn consume_fifo(lots: &mut [LotState], quantity: Decimal) -> Decimal {
        let mut to_consume = quantity;
        for lot in lots.iter_mut() {
            if to_consume <= Decimal::ZERO {
                break;
            }
            if lot.remaining_quantity <= Decimal::ZERO {
                continue;
            }
            let consumed = to_consume.min(lot.remaining_quantity);
            lot.remaining_quantity -= consumed;
            to_consume -= consumed;
        }
        to_consume
    }

    /// Explicit allocation overrides date-order default consumption: only
    /// the referenced lots are decremented.
    fn consume_allocated(
        lots: &mut [LotState],
        tx: &Transaction,
        allocation: &crate::transactions::LotAllocation,
    ) {
        for (lot_id, requested) in &allocation.entries {
            match lots
                .iter_mut()
                .find(|lot| &lot.source_transaction_id == lot_id)
            {
                Some(lot) => {
                    if *requested > lot.remaining_quantity {
                        warn!(
                            "Sell {} allocates {} from lot {} but only {} remains; capping",
                            tx.id, requested, lot_id, lot.remaining_quantity
                        );
                    }
                    let consumed = (*requested).min(lot.remaining_quantity);
                    lot.remaining_quantity -= consumed;
                }
                None => {
                    warn!(
                        "Sell {} references unknown lot {}; allocation entry ignored",
                        tx.id, lot_id
                    );
                }
            }
        }
    }

    /// SPLIT rescales every open lot: quantities multiply by new/old and the
    /// per-unit cost divides by the same ratio, leaving cost basis intact.
    fn apply_split(lots: &mut [LotState], tx: &Transaction) {
        let (ratio_new, ratio_old) = (tx.quantity, tx.price_per_unit);
        if ratio_new <= Decimal::ZERO || ratio_old <= Decimal::ZERO {
            warn!(
                "Split {} has non-positive ratio {}:{}; ignored",
                tx.id, ratio_new, ratio_old
            );
            return;
        }
        let ratio = ratio_new / ratio_old;
        for lot in lots.iter_mut() {
            lot.original_quantity *= ratio;
            lot.remaining_quantity *= ratio;
            lot.cost_per_unit /= ratio;
        }
    }

    /// BONUS opens a zero-cost lot of `held * new / old` shares dated at the
    /// action, preserving the holding-period clock of the entitlement.
    fn apply_bonus(lots: &mut Vec<LotState>, tx: &Transaction) {
        let (ratio_new, ratio_old) = (tx.quantity, tx.price_per_unit);
        if ratio_new <= Decimal::ZERO || ratio_old <= Decimal::ZERO {
            warn!(
                "Bonus {} has non-positive ratio {}:{}; ignored",
                tx.id, ratio_new, ratio_old
            );
            return;
        }
        let held: Decimal = lots.iter().map(|lot| lot.remaining_quantity).sum();
        if held <= Decimal::ZERO {
            warn!("Bonus {} on an empty holding; ignored", tx.id);
            return;
        }
        let bonus_quantity = held * ratio_new / ratio_old;
        lots.push(LotState {
            source_transaction_id: tx.id.clone(),
            acquisition_date: tx.date,
            original_quantity: bonus_quantity,
            remaining_quantity: bonus_quantity,
            cost_per_unit: Decimal::ZERO,
        });
    }
}
