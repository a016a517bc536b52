//! Lightweight in-process instruments.
//!
//! Gauges and counters are stored as atomics and gathered into exposition
//! samples by the `/v1/metrics` handler. No metrics client crate is involved.

pub mod registry;

pub use registry::{Counter, Gauge, Registry};
