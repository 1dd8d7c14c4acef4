//! Transactions module - ledger entry models, constants, and traits.

mod transactions_constants;
mod transactions_model;
mod transactions_traits;


pub use transactions_constants::*;
pub use transactions_model::{
    LotAllocation, NewTransaction, Transaction, TransactionType,
};
pub use transactions_traits::TransactionRepositoryTrait;
