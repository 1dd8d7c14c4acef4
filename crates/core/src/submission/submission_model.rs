//! Batch submission outcome models.

use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// A backend rejection partway through a batch. The message is the
/// backend's own wording, surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSubmitFailure {
    /// Index of the draft that was rejected.
    pub index: usize,
    pub message: String,
}

/// What actually landed on the ledger.
///
/// `committed` holds every transaction accepted before the failure (all of
/// them when `failure` is `None`). There is no automatic compensation for a
/// committed prefix; callers decide what to do with the gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSubmitOutcome {
    pub committed: Vec<Transaction>,
    pub failure: Option<BatchSubmitFailure>,
}

impl BatchSubmitOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn is_partial(&self) -> bool {
        self.failure.is_some() && !self.committed.is_empty()
    }
}
