//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store check (counts the items)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Item store check.
///
/// Returns 200 with the item count when the store answers, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.item_repo.count_items().await {
        Ok(items) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "items": items,
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
