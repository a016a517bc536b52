//! Scan-cycle statistics.
//!
//! `Metrics` owns the five watchtower instruments. The scan loop only ever
//! touches them through [`Metrics::register_scan`] and
//! [`Metrics::register_skipped`], so `scans_total` cannot move without the
//! matching gauge or skip update.
//!
//! Each instrument update is atomic on its own, but a call as a whole is not:
//! a scrape landing mid-`register_scan` may see `scans_total` already bumped
//! while the gauges still hold the previous scan's values.

use std::sync::Arc;

use watchtower_core::error::Result;

use crate::obs::{Counter, Gauge, Registry};

pub const SCANNED: &str = "watchtower_containers_scanned";
pub const UPDATED: &str = "watchtower_containers_updated";
pub const FAILED: &str = "watchtower_containers_failed";
pub const SCANS_TOTAL: &str = "watchtower_scans_total";
pub const SCANS_SKIPPED: &str = "watchtower_scans_skipped";

/// Result counts of one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanMetric {
    pub scanned: f64,
    pub updated: f64,
    pub failed: f64,
}

impl ScanMetric {
    pub fn new(scanned: usize, updated: usize, failed: usize) -> Self {
        Self {
            scanned: scanned as f64,
            updated: updated as f64,
            failed: failed as f64,
        }
    }
}

pub struct Metrics {
    scanned: Arc<Gauge>,
    updated: Arc<Gauge>,
    failed: Arc<Gauge>,
    total: Arc<Counter>,
    skipped: Arc<Counter>,
}

impl Metrics {
    /// Register all five instruments in `registry`.
    ///
    /// Fails only if one of the names is already taken, i.e. when a second
    /// `Metrics` is built against the same registry.
    pub fn new(registry: &Registry) -> Result<Self> {
        Ok(Self {
            scanned: registry.register_gauge(
                SCANNED,
                "Number of containers scanned for changes by watchtower during the last scan",
            )?,
            updated: registry.register_gauge(
                UPDATED,
                "Number of containers updated by watchtower during the last scan",
            )?,
            failed: registry.register_gauge(
                FAILED,
                "Number of containers where update failed during the last scan",
            )?,
            total: registry
                .register_counter(SCANS_TOTAL, "Number of scans since the watchtower started")?,
            skipped: registry.register_counter(
                SCANS_SKIPPED,
                "Number of skipped scans since watchtower started",
            )?,
        })
    }

    /// Record an executed scan. Gauges are overwritten, not accumulated.
    /// Values are taken as given; negative counts are not rejected.
    pub fn register_scan(&self, scanned: f64, updated: f64, failed: f64) {
        self.total.inc();
        self.scanned.set(scanned);
        self.updated.set(updated);
        self.failed.set(failed);
        tracing::debug!(scanned, updated, failed, "scan registered");
    }

    /// Record a scan that was rescheduled instead of run. Gauges are untouched.
    pub fn register_skipped(&self) {
        self.total.inc();
        self.skipped.inc();
        tracing::debug!("skipped scan registered");
    }

    /// Single entry point for a scan loop: `None` means the scan was skipped.
    pub fn register(&self, metric: Option<&ScanMetric>) {
        match metric {
            Some(m) => self.register_scan(m.scanned, m.updated, m.failed),
            None => self.register_skipped(),
        }
    }

    pub fn scanned(&self) -> f64 { self.scanned.get() }
    pub fn updated(&self) -> f64 { self.updated.get() }
    pub fn failed(&self) -> f64 { self.failed.get() }
    pub fn total(&self) -> u64 { self.total.get() }
    pub fn skipped(&self) -> u64 { self.skipped.get() }
}
