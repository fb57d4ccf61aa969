//! `atomic-executor serve` -- HTTP JSON host for the atomic executor.
//!
//! Exposes an [`AtomicExecutorApi`] implementation as an async HTTP service
//! using `axum` + `tokio`. Every request is handled on its own task; the
//! executor itself is stateless so no coordination is needed.
//!
//! Endpoints:
//! - GET  /v1/health                              - Service health
//! - GET  /v1/version                             - Service identity
//! - POST /v1/atomic-node-runs                    - Execute one atomic node run
//! - POST /v1/atomic-node-runs/{node_run_id}/cancel - Request cancellation (204)
//!
//! A node run that fails is still a 200 response: the failure is carried in
//! the result body. Only unreadable requests produce 4xx responses.

mod handlers;
mod state;

use std::sync::Arc;

use atomic_executor_core::AtomicExecutorApi;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::handlers::{
    handle_cancel, handle_execute, handle_health, handle_not_found, handle_version,
};
use self::state::AppState;

/// Maximum request body size: 10 MB.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the v1 router around an executor.
pub(crate) fn build_router(executor: Arc<dyn AtomicExecutorApi>) -> Router {
    let state = Arc::new(AppState { executor });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/v1/health", get(handle_health))
        .route("/v1/version", get(handle_version))
        .route("/v1/atomic-node-runs", post(handle_execute))
        .route(
            "/v1/atomic-node-runs/{node_run_id}/cancel",
            post(handle_cancel),
        )
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

/// Serve `executor` on `host:port` until Ctrl+C.
pub async fn start_server(
    host: &str,
    port: u16,
    executor: Arc<dyn AtomicExecutorApi>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(executor);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("atomic executor listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
