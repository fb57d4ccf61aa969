//! HTTP route handlers: one per executor operation.

use std::sync::Arc;

use atomic_executor_model::{
    AtomicExecuteRequest, CancelAtomicNodeRunRequest, ExecuteAtomicNodeRunRequest, HealthRequest,
    VersionRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::json_error;
use super::state::AppState;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /v1/health
pub(crate) async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.executor.health(HealthRequest).await;
    (StatusCode::OK, Json(health))
}

/// GET /v1/version
pub(crate) async fn handle_version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let version = state.executor.version(VersionRequest).await;
    (StatusCode::OK, Json(version))
}

/// POST /v1/atomic-node-runs
pub(crate) async fn handle_execute(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AtomicExecuteRequest>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return json_error(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response()
        }
    };

    let result = state
        .executor
        .execute_atomic_node_run(ExecuteAtomicNodeRunRequest { body })
        .await;
    (StatusCode::OK, Json(result)).into_response()
}

/// POST /v1/atomic-node-runs/{node_run_id}/cancel
pub(crate) async fn handle_cancel(
    State(state): State<Arc<AppState>>,
    Path(node_run_id): Path<String>,
) -> StatusCode {
    state
        .executor
        .cancel_atomic_node_run(CancelAtomicNodeRunRequest { node_run_id })
        .await;
    StatusCode::NO_CONTENT
}
