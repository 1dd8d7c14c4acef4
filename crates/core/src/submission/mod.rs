//! Submission module - sequential, non-transactional batch writes.

mod batch_submitter;
mod submission_model;


pub use batch_submitter::BatchSubmitter;
pub use submission_model::{BatchSubmitFailure, BatchSubmitOutcome};
