//! Axum router wiring.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let metrics_path = state.cfg().web.telemetry_path.clone();

    Router::new()
        .route("/", get(ops::landing))
        .route("/healthz", get(ops::healthz))
        .route(&metrics_path, get(ops::metrics))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Log every request before handling it.
async fn log_request(req: Request, next: Next) -> Response {
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(remote_addr = %remote, method = %req.method(), uri = %req.uri(), "request");
    next.run(req).await
}
