//! watchtower API server.
//!
//! Serves `GET /v1/metrics`. Config path defaults to `watchtower.yaml` and can
//! be overridden with the first argument.

use tracing_subscriber::{fmt, EnvFilter};

use watchtower_api::{app_state, config, router};
use watchtower_core::error::{Result, WatchtowerError};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "watchtower-api failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "watchtower.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.api.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(&state);

    tracing::info!(%listen, path = state.handler().path, "watchtower-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| WatchtowerError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| WatchtowerError::Internal(format!("server failed: {e}")))
}
