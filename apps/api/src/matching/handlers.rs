//! Axum route handlers for job comparison and cover letters.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::comparison::{compare_resume, ComparisonReport};
use crate::matching::cover_letter::generate_cover_letter;
use crate::state::AppState;
use crate::store::NewAnalysis;

fn default_job_title() -> String {
    "Unknown Position".to_string()
}

fn default_company() -> String {
    "Unknown Company".to_string()
}

#[derive(Debug, Deserialize)]
pub struct JobCompareRequest {
    pub resume_id: String,
    pub job_description: String,
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default = "default_company")]
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/job/compare
///
/// Scores the resume against a job description, records the analysis and
/// attaches a learning path for the missing skills.
pub async fn handle_compare_job(
    State(state): State<AppState>,
    Json(request): Json<JobCompareRequest>,
) -> Result<Json<ComparisonReport>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let (resume, transcript) = state
        .resumes
        .resume_with_transcript(&request.resume_id)
        .await
        .ok_or_else(|| AppError::resume_not_found(&request.resume_id))?;

    info!("Comparing job for {}", request.resume_id);
    let comparison = compare_resume(
        &state.llm,
        &resume,
        transcript.as_ref(),
        &request.job_description,
    )
    .await?;
    info!(
        "Fit score: {}% for {} ({} missing skills)",
        comparison.fit_score,
        request.resume_id,
        comparison.missing_skills.len()
    );

    state
        .history
        .add_analysis(NewAnalysis {
            resume_id: &request.resume_id,
            job_title: &request.job_title,
            company: &request.company,
            fit_score: comparison.fit_score,
            missing_skills: &comparison.missing_skills,
        })
        .await?;

    let learning_path = state.learning_paths.generate(&comparison.missing_skills);

    Ok(Json(ComparisonReport {
        comparison,
        learning_path,
    }))
}

/// POST /api/cover-letter/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<JobCompareRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let (resume, transcript) = state
        .resumes
        .resume_with_transcript(&request.resume_id)
        .await
        .ok_or_else(|| AppError::resume_not_found(&request.resume_id))?;

    info!(
        "Generating cover letter for {} ({})",
        request.resume_id, request.company
    );
    let cover_letter = generate_cover_letter(
        &state.llm,
        &resume,
        transcript.as_ref(),
        &request.company,
        &request.job_description,
    )
    .await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_title_and_company() {
        let request: JobCompareRequest = serde_json::from_str(
            r#"{"resume_id": "resume_1", "job_description": "Analyst"}"#,
        )
        .unwrap();
        assert_eq!(request.job_title, "Unknown Position");
        assert_eq!(request.company, "Unknown Company");
    }
}
