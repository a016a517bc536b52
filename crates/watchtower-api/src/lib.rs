//! watchtower API library entry.
//!
//! Instruments for scan-cycle statistics and the HTTP endpoint that exposes
//! them to Prometheus. Consumed by the binary (`main.rs`), by the daemon's
//! scan loop, and by integration tests.

pub mod app_state;
pub mod config;
pub mod endpoint;
pub mod metrics;
pub mod obs;
pub mod ops;
pub mod router;

pub use endpoint::{Handler, METRICS_PATH};
pub use metrics::{Metrics, ScanMetric};
