use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::skills::category_map::CategoryMap;
use crate::skills::classifier::classify;
use crate::skills::normalizer::normalize_skills;
use crate::skills::taxonomy::Category;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub skill: String,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub skills: Value,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub skills: CategoryMap,
}

/// POST /api/v1/skills/classify
pub async fn handle_classify(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let skill = req.skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("skill must not be blank".to_string()));
    }
    Ok(Json(ClassifyResponse {
        skill: skill.to_string(),
        category: classify(skill),
    }))
}

/// POST /api/v1/skills/normalize
pub async fn handle_normalize(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        skills: normalize_skills(&req.skills),
    })
}
