//! Lots module - open-lot inventory reconstruction and sell allocation.

mod allocation;
mod inventory_builder;
mod lots_model;


#[cfg(test)]
mod inventory_builder_tests;

pub use allocation::{AllocationOutcome, AllocationPolicy, LotAllocationStrategy};
pub use inventory_builder::LotInventoryBuilder;
pub use lots_model::{is_quantity_significant, OpenLot, ServerLot};
