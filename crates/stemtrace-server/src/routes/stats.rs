//! Stats and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::{AppState, StemStats};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/health", get(get_health))
}

/// GET /api/stats — counters since startup.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StemStats> {
    Json(state.snapshot())
}

/// GET /api/health
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stemtrace",
        "version": env!("CARGO_PKG_VERSION"),
        "maxWordLen": state.config.max_word_len,
        "maxBatch": state.config.max_batch,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemtrace_core::StemtraceConfig;

    #[tokio::test]
    async fn test_stats_shape() {
        let state = Arc::new(AppState::new(StemtraceConfig::default()));
        state.stem("hopping").unwrap();

        let Json(stats) = get_stats(State(state)).await;
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["wordsStemmed"], 1);
        assert_eq!(json["unchangedWords"], 0);
        assert_eq!(json["rulesByStep"]["1b"], 1);
        assert_eq!(json["rulesByStep"]["1b-post"], 1);
    }

    #[tokio::test]
    async fn test_health() {
        let state = Arc::new(AppState::new(StemtraceConfig::default()));
        let Json(health) = get_health(State(state)).await;
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["service"], "stemtrace");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(health["maxWordLen"], 64);
        assert_eq!(health["maxBatch"], 256);
    }
}
