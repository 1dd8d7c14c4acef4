//! Sequential submission of multi-transaction batches.

use log::{debug, error};
use std::sync::Arc;

use crate::errors::Result;
use crate::submission::submission_model::{BatchSubmitFailure, BatchSubmitOutcome};
use crate::transactions::{NewTransaction, TransactionRepositoryTrait};

/// Submits a synthesized batch (DRIP and friends) one transaction at a
/// time.
///
/// Submission is sequential and non-transactional: no distributed lock, no
/// idempotency key, no retry. When a later transaction is rejected after an
/// earlier one was committed there is no compensating action; the outcome
/// reports the committed prefix and the failure so the caller can surface
/// it instead of silently losing half a batch.
#[derive(Clone)]
pub struct BatchSubmitter {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BatchSubmitter {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Validates every draft, then posts them in order.
    ///
    /// A validation failure anywhere rejects the whole batch before the
    /// first network call, so an invalid DRIP never half-submits. A backend
    /// rejection stops the walk and is reported verbatim in the outcome.
    pub async fn submit_batch(&self, drafts: Vec<NewTransaction>) -> Result<BatchSubmitOutcome> {
        for draft in &drafts {
            draft.validate()?;
        }

        debug!("Submitting batch of {} transaction(s)", drafts.len());
        let mut committed = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            match self.repository.create_transaction(draft).await {
                Ok(transaction) => committed.push(transaction),
                Err(e) => {
                    error!(
                        "Batch submission stopped at index {} after {} committed: {}",
                        index,
                        committed.len(),
                        e
                    );
                    return Ok(BatchSubmitOutcome {
                        committed,
                        failure: Some(BatchSubmitFailure {
                            index,
                            message: e.to_string(),
                        }),
                    });
                }
            }
        }

        Ok(BatchSubmitOutcome {
            committed,
            failure: None,
        })
    }
}
