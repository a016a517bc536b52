//! Operational HTTP endpoints.
//!
//! - `/v1/metrics` : Prometheus text format

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use watchtower_core::exposition::{self, CONTENT_TYPE};

use crate::obs::Registry;

/// Render every registered instrument. Never touches instrument state.
pub async fn metrics(State(registry): State<Arc<Registry>>) -> Response {
    let samples = registry.gather();
    tracing::trace!(instruments = samples.len(), "metrics scraped");
    let body = exposition::render(&samples);

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
