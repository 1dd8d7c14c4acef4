//! HTTP client for the Lotfolio ledger backend.
//!
//! Implements the boundary traits of `lotfolio-core` over the backend's
//! REST API: transaction history and submission, server-computed open
//! lots, historical FX rates, and asset lookup/creation. Transport
//! failures are converted to the core's transport-agnostic error types
//! here; nothing above this crate sees an HTTP status code.

mod client;

pub use client::LedgerClient;
