//! Stemming routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use stemtrace_porter::{StemResult, TraceEntry};

use super::{api_error, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stem", post(stem_word))
        .route("/stem/batch", post(stem_batch))
}

#[derive(Debug, Deserialize)]
pub struct StemRequest {
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StemResponse {
    pub input: String,
    pub steps: Vec<TraceEntry>,
    pub final_stem: String,
    pub rules_applied: usize,
}

impl From<StemResult> for StemResponse {
    fn from(result: StemResult) -> Self {
        let input = result.input.clone();
        let (steps, final_stem) = result.into_parts();
        Self {
            input,
            rules_applied: steps.len(),
            steps,
            final_stem,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<StemResponse>,
    pub total: usize,
}

/// POST /api/stem — stem one word and return its trace.
async fn stem_word(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StemRequest>,
) -> ApiResult<StemResponse> {
    let result = state.stem(&req.word).map_err(api_error)?;
    Ok(Json(result.into()))
}

/// POST /api/stem/batch — stem several words at once.
async fn stem_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> ApiResult<BatchResponse> {
    let results: Vec<StemResponse> = state
        .stem_batch(&req.words)
        .map_err(api_error)?
        .into_iter()
        .map(StemResponse::from)
        .collect();
    Ok(Json(BatchResponse {
        total: results.len(),
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use stemtrace_core::StemtraceConfig;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(StemtraceConfig {
            max_word_len: 16,
            max_batch: 2,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_stem_word() {
        let Json(resp) = stem_word(
            State(state()),
            Json(StemRequest {
                word: "Running".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.input, "running");
        assert_eq!(resp.final_stem, "run");
        assert_eq!(resp.rules_applied, 2);
        assert_eq!(resp.steps[0].label, "1b: (v) ING → ''");
    }

    #[tokio::test]
    async fn test_response_shape() {
        let Json(resp) = stem_word(State(state()), Json(StemRequest { word: "cats".into() }))
            .await
            .unwrap();
        let json = serde_json::to_value(&resp).unwrap();

        assert!(json["input"].is_string());
        assert!(json["finalStem"].is_string());
        assert!(json["rulesApplied"].is_number());
        assert!(json["steps"].is_array());
        let step = &json["steps"][0];
        assert_eq!(step["before"], "cats");
        assert_eq!(step["after"], "cat");
        assert_eq!(step["step"], "1a");
        assert!(step["label"].is_string());
    }

    #[tokio::test]
    async fn test_word_too_long_is_bad_request() {
        let err = stem_word(
            State(state()),
            Json(StemRequest {
                word: "antidisestablishmentarianism".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1 .0["error"].as_str().unwrap().contains("limit is 16"));
    }

    #[tokio::test]
    async fn test_batch() {
        let state = state();
        let Json(resp) = stem_batch(
            State(state.clone()),
            Json(BatchRequest {
                words: vec!["caresses".into(), "relational".into()],
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.total, 2);
        assert_eq!(resp.results[0].final_stem, "caress");
        assert_eq!(resp.results[1].final_stem, "relat");
        assert_eq!(state.snapshot().batches, 1);
    }

    #[tokio::test]
    async fn test_batch_over_limit() {
        let err = stem_batch(
            State(state()),
            Json(BatchRequest {
                words: vec!["a".into(), "b".into(), "c".into()],
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
