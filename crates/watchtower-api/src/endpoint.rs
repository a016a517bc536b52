//! Metrics endpoint: the path, the scrape handler, and the registry it reads.

use std::sync::Arc;

use axum::{routing::get, Router};

use watchtower_core::error::Result;
use watchtower_core::exposition;

use crate::metrics::Metrics;
use crate::obs::Registry;
use crate::ops;

/// Fixed scrape path.
pub const METRICS_PATH: &str = "/v1/metrics";

/// HTTP handle for serving metric data.
///
/// Built once at startup. The scan loop keeps `metrics()` to record scans;
/// the HTTP server mounts `router()` (or `path` + `ops::metrics`).
#[derive(Clone)]
pub struct Handler {
    pub path: &'static str,
    registry: Arc<Registry>,
    metrics: Arc<Metrics>,
}

impl Handler {
    /// Build a fresh registry with the watchtower instruments in it.
    pub fn new() -> Result<Self> {
        Self::with_registry(Arc::new(Registry::new()))
    }

    /// Attach to an existing registry; any other instruments in it are
    /// rendered alongside the watchtower ones.
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let metrics = Arc::new(Metrics::new(&registry)?);
        Ok(Self {
            path: METRICS_PATH,
            registry,
            metrics,
        })
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Current exposition body. Read-only.
    pub fn render(&self) -> String {
        exposition::render(&self.registry.gather())
    }

    /// Router with `GET path` mounted.
    pub fn router(&self) -> Router {
        Router::new()
            .route(self.path, get(ops::metrics))
            .with_state(self.registry())
    }
}
