pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;
use crate::text::handlers as text;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/text/segment", post(text::handle_segment))
        .route("/api/v1/skills/classify", post(skills::handle_classify))
        .route("/api/v1/skills/normalize", post(skills::handle_normalize))
        .route("/api/v1/resumes/ingest", post(resume::handle_ingest))
        .route("/api/v1/suggestions/merge", post(suggestions::handle_merge))
        .layer(body_limit)
        .with_state(state)
}
