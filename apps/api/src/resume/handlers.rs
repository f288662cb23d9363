use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::resume::ingest::ingest_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub resume: ResumeDocument,
}

/// POST /api/v1/resumes/ingest
/// Body is the raw extracted resume object.
pub async fn handle_ingest(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<IngestResponse>, AppError> {
    if !raw.is_object() {
        return Err(AppError::UnprocessableEntity(
            "extracted resume must be a JSON object".to_string(),
        ));
    }

    let resume = ingest_resume(&raw, state.ids.as_ref());
    info!(
        "Ingested resume: {} experience, {} education, {} skills",
        resume.experience.len(),
        resume.education.len(),
        resume.skills.skill_count()
    );
    Ok(Json(IngestResponse { resume }))
}
