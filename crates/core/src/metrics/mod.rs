//! Metrics module - per-lot and aggregate display figures.

mod metrics_calculator;
mod metrics_model;


pub use metrics_calculator::{Clock, HoldingMetricsCalculator, SystemClock};
pub use metrics_model::{HoldingMetrics, LotMetrics};
