//! Axum route handlers for resume and transcript intake.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{StoredResume, TranscriptSummary};
use crate::resume::extract::{
    extract_pdf_text, extract_skills, extract_transcript, preview, validate_resume_text,
};
use crate::state::AppState;

/// Multipart field carrying the PDF.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_id: String,
    pub skills: Vec<String>,
    pub preview: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptUploadRequest {
    pub resume_id: String,
    pub transcript_text: String,
}

/// POST /api/resume/upload
///
/// Extracts text from the uploaded PDF, asks the LLM for skills and stores the result.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let (filename, pdf_bytes) = read_file_field(multipart).await?;
    info!("Received resume {filename} ({} bytes)", pdf_bytes.len());

    let text = extract_pdf_text(pdf_bytes).await?;
    info!("Extracted {} characters from {filename}", text.chars().count());
    validate_resume_text(&text)?;

    let skills = extract_skills(&state.llm, &text).await?;
    let preview = preview(&text);

    let resume_id = state
        .resumes
        .insert_resume(StoredResume {
            text,
            skills: skills.clone(),
            filename,
            uploaded_at: Utc::now(),
        })
        .await;
    info!("Stored {resume_id} with {} skills", skills.len());

    Ok(Json(UploadResumeResponse {
        resume_id,
        skills,
        preview,
    }))
}

/// POST /api/transcript/upload
///
/// Extracts GPA, courses and honors from pasted transcript text and attaches them to a resume.
pub async fn handle_upload_transcript(
    State(state): State<AppState>,
    Json(request): Json<TranscriptUploadRequest>,
) -> Result<Json<TranscriptSummary>, AppError> {
    if request.transcript_text.trim().is_empty() {
        return Err(AppError::Validation(
            "transcript_text cannot be empty".to_string(),
        ));
    }
    if state.resumes.resume(&request.resume_id).await.is_none() {
        return Err(AppError::resume_not_found(&request.resume_id));
    }

    let summary = extract_transcript(&state.llm, &request.transcript_text).await?;
    state
        .resumes
        .set_transcript(&request.resume_id, summary.clone())
        .await;
    info!("Transcript stored for {}", request.resume_id);

    Ok(Json(summary))
}

async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok((filename, data));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}
