use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::state::AppState;
use crate::suggestions::merge::{merge_value, MergeOutcome};

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    #[serde(default)]
    pub resume: Value,
    #[serde(default)]
    pub suggestion: Value,
}

/// POST /api/v1/suggestions/merge
pub async fn handle_merge(
    State(state): State<AppState>,
    Json(req): Json<MergeRequest>,
) -> Result<Json<MergeOutcome>, AppError> {
    let resume: ResumeDocument = if req.resume.is_null() {
        ResumeDocument::default()
    } else {
        serde_json::from_value(req.resume).map_err(|e| {
            AppError::UnprocessableEntity(format!("resume is not a valid document: {e}"))
        })?
    };

    let outcome = merge_value(&resume, &req.suggestion, state.ids.as_ref());
    info!("Merged suggestions: {} change(s)", outcome.changes.len());
    Ok(Json(outcome))
}
