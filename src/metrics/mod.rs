//! Latency aggregation and shared run counters.
mod aggregate;
mod gauge;
mod stats;


pub use aggregate::{OverallResult, aggregate};
pub use gauge::{InFlightGauge, InFlightGuard};
pub use stats::mean_duration;
