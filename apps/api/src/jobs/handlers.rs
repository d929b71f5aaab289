//! Axum route handler for job search.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::board::JobPosting;
use crate::jobs::prompts::DEFAULT_KEYWORD_SKILLS;
use crate::jobs::ranking::rank_jobs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub resume_id: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
}

/// Explicit keywords win; otherwise the first few resume skills.
pub fn search_keywords(explicit: Option<&str>, skills: &[String]) -> String {
    match explicit.map(str::trim).filter(|k| !k.is_empty()) {
        Some(keywords) => keywords.to_string(),
        None => skills
            .iter()
            .take(DEFAULT_KEYWORD_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// POST /api/jobs/search
///
/// Searches the job board and ranks the listings by LLM match score.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let resume = state
        .resumes
        .resume(&request.resume_id)
        .await
        .ok_or_else(|| AppError::resume_not_found(&request.resume_id))?;

    let keywords = search_keywords(request.keywords.as_deref(), &resume.skills);
    info!("Searching jobs for {}: '{keywords}'", request.resume_id);

    let jobs = state.job_board.search(&keywords).await;
    let jobs = rank_jobs(&state.llm, &resume.skills, jobs).await;
    info!("Ranked {} jobs for {}", jobs.len(), request.resume_id);

    Ok(Json(JobSearchResponse { jobs }))
}
