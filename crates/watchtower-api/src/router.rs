//! Axum router wiring.
//!
//! Currently exposes a single `/v1/metrics` route for scrapers.

use axum::Router;

use crate::app_state::AppState;

pub fn build_router(state: &AppState) -> Router {
    Router::new().merge(state.handler().router())
}
