//! HTTP route handlers under `/api`.

pub mod rules;
pub mod stats;
pub mod stem;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use stemtrace_core::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// JSON body on success, `(status, {"error": ...})` on failure.
pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<serde_json::Value>)>;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(stem::routes())
        .merge(rules::routes())
        .merge(stats::routes())
}

pub(crate) fn api_error(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("Request failed ({}): {}", status, err);
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}
