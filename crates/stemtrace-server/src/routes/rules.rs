//! Rule reference routes.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use stemtrace_porter::{rule_catalog, rules_for_step, RuleInfo, Step};

use super::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rules", get(get_rules))
        .route("/rules/{step}", get(get_step_rules))
}

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub rules: Vec<RuleInfo>,
    pub total: usize,
}

impl From<Vec<RuleInfo>> for RulesResponse {
    fn from(rules: Vec<RuleInfo>) -> Self {
        Self {
            total: rules.len(),
            rules,
        }
    }
}

/// GET /api/rules — every rule with a worked example.
async fn get_rules() -> Json<RulesResponse> {
    Json(rule_catalog().into())
}

/// GET /api/rules/{step} — rules of one step ("1a", "1b-post", "4", ...).
async fn get_step_rules(Path(step): Path<String>) -> ApiResult<RulesResponse> {
    let step: Step = step.parse().map_err(|e: String| {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": e })),
        )
    })?;
    Ok(Json(rules_for_step(step).into()))
}
