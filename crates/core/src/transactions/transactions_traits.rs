use async_trait::async_trait;

use crate::errors::Result;
use crate::lots::ServerLot;
use crate::transactions::{NewTransaction, Transaction};

/// Trait defining the contract for transaction repository operations.
///
/// The backend ledger owns persistence and strict validation; this trait is
/// the read/write boundary the core talks through.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Full transaction history for one asset within a portfolio. Ordering
    /// is not guaranteed; the inventory builder sorts.
    async fn get_transactions(
        &self,
        portfolio_id: &str,
        asset_id: &str,
    ) -> Result<Vec<Transaction>>;

    /// Server-computed open-lot view, used when the backend rather than the
    /// client is authoritative for available quantity.
    async fn get_available_lots(&self, asset_id: &str) -> Result<Vec<ServerLot>>;

    /// Submits one transaction. A SELL carries its explicit lot allocation
    /// in the `links` field of the payload.
    async fn create_transaction(&self, draft: NewTransaction) -> Result<Transaction>;
}
