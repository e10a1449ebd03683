//! Hashtag Proxy Server
//!
//! Serves the dashboard backend:
//! ```text
//! GET /health                  - Health check
//! GET /api/instagram/hashtag   - Hashtag lookup proxy (RapidAPI)
//! GET /api/dashboard           - Dashboard view model
//! ```
//!
//! Each request is handled independently; the only shared state is the
//! immutable configuration and the upstream HTTP client.

use crate::api::routes::{get_dashboard, get_hashtag};
use crate::api::ApiState;
use crate::config::ProxyConfig;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

// ============================================================================
// /health ENDPOINT
// ============================================================================

pub async fn health_check() -> &'static str {
    "OK"
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/instagram/hashtag", get(get_hashtag))
        .route("/api/dashboard", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// SERVER STARTUP
// ============================================================================

pub async fn run_server(config: ProxyConfig) -> anyhow::Result<()> {
    if config.api_key().is_none() {
        warn!("RAPIDAPI_KEY is not set; hashtag lookups will fail with a configuration error");
    }

    let addr = config.bind_addr();
    let upstream = config.upstream_base_url.clone();
    let state = Arc::new(ApiState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("╔══════════════════════════════════════════════════════════════╗");
    info!("║          Instagram Growth Dashboard - Hashtag Proxy          ║");
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Upstream:     {:44} ║", upstream);
    info!("║  Listening on: {:44} ║", addr);
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Endpoints:                                                  ║");
    info!("║    GET  /health                - Health check                ║");
    info!("║    GET  /api/instagram/hashtag - Hashtag lookup proxy        ║");
    info!("║    GET  /api/dashboard         - Dashboard view              ║");
    info!("╚══════════════════════════════════════════════════════════════╝");

    axum::serve(listener, app).await?;

    Ok(())
}
