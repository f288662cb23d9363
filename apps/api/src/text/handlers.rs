use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::text::segmenter::segment_value;

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    /// Anything; non-text values segment to an empty list.
    #[serde(default)]
    pub text: Value,
}

#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub bullets: Vec<String>,
}

/// POST /api/v1/text/segment
pub async fn handle_segment(Json(req): Json<SegmentRequest>) -> Json<SegmentResponse> {
    Json(SegmentResponse {
        bullets: segment_value(&req.text),
    })
}
