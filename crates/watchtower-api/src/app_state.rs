//! Shared application state for the watchtower API.
//!
//! Startup errors (duplicate instrument registration) surface as `Result`
//! instead of a panic.

use std::sync::Arc;

use watchtower_core::error::Result;

use crate::config::ApiConfig;
use crate::endpoint::Handler;
use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    handler: Handler,
}

impl AppState {
    pub fn new(cfg: ApiConfig) -> Result<Self> {
        let handler = Handler::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, handler }),
        })
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn handler(&self) -> &Handler {
        &self.inner.handler
    }

    /// What the scan loop holds on to.
    pub fn metrics(&self) -> Arc<Metrics> {
        self.inner.handler.metrics()
    }
}
