pub mod cors;
pub mod health;
pub mod history;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::coach::handlers as coach;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Intake
        .route("/api/resume/upload", post(resume::handle_upload_resume))
        .route(
            "/api/transcript/upload",
            post(resume::handle_upload_transcript),
        )
        // Matching
        .route("/api/job/compare", post(matching::handle_compare_job))
        .route(
            "/api/cover-letter/generate",
            post(matching::handle_generate_cover_letter),
        )
        .route("/api/jobs/search", post(jobs::handle_search_jobs))
        // History and coach
        .route("/api/history/:resume_id", get(history::history_handler))
        .route("/api/chat", post(coach::handle_chat))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
