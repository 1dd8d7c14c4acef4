//! Lotfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the tax-lot and corporate-action business logic for
//! Lotfolio. It is transport-agnostic and defines traits that are implemented
//! by the `ledger-client` crate against the backend REST API.

pub mod assets;
pub mod constants;
pub mod corporate_actions;
pub mod errors;
pub mod fx;
pub mod lots;
pub mod metrics;
pub mod submission;
pub mod transactions;

// Re-export common types from the lot and transaction modules
pub use lots::*;
pub use transactions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
