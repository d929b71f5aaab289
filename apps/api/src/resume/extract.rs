//! Resume text extraction and the LLM skill / transcript parsers.

use anyhow::anyhow;
use bytes::Bytes;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::{render, truncate_chars};
use crate::llm_client::LlmClient;
use crate::models::lenient::null_as_default;
use crate::models::resume::TranscriptSummary;
use crate::resume::prompts::{
    RESUME_EXCERPT_CHARS, SKILLS_PROMPT_TEMPLATE, TRANSCRIPT_EXCERPT_CHARS,
    TRANSCRIPT_PROMPT_TEMPLATE,
};

/// Anything shorter is treated as a scanned or empty PDF.
pub const MIN_RESUME_CHARS: usize = 50;
pub const PREVIEW_CHARS: usize = 300;

#[derive(Debug, Deserialize)]
struct SkillsReply {
    #[serde(default, deserialize_with = "null_as_default")]
    skills: Vec<String>,
}

/// Extracts text from PDF bytes on the blocking pool.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    let joined =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match joined {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::UnprocessableEntity(format!(
            "Could not read PDF: {e}"
        ))),
        Err(e) if e.is_panic() => {
            warn!("pdf-extract panicked on upload");
            Err(AppError::UnprocessableEntity(
                "Could not read PDF: unsupported or corrupt file".to_string(),
            ))
        }
        Err(e) => Err(AppError::Internal(anyhow!("PDF extraction task failed: {e}"))),
    }
}

/// Rejects resumes with too little extractable text.
pub fn validate_resume_text(text: &str) -> Result<(), AppError> {
    if text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "Resume appears to be empty or unreadable".to_string(),
        ));
    }
    Ok(())
}

/// First `PREVIEW_CHARS` characters followed by an ellipsis.
pub fn preview(text: &str) -> String {
    format!("{}...", truncate_chars(text, PREVIEW_CHARS))
}

/// Asks the LLM for the resume's skills, trimmed and with blanks dropped.
pub async fn extract_skills(llm: &LlmClient, resume_text: &str) -> Result<Vec<String>, AppError> {
    let prompt = render(
        SKILLS_PROMPT_TEMPLATE,
        &[("resume_text", truncate_chars(resume_text, RESUME_EXCERPT_CHARS))],
    );
    let reply: SkillsReply = llm
        .call_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Skill extraction failed: {e}")))?;
    Ok(clean_skills(reply.skills))
}

/// Asks the LLM for GPA, relevant courses and honors.
pub async fn extract_transcript(
    llm: &LlmClient,
    transcript_text: &str,
) -> Result<TranscriptSummary, AppError> {
    let prompt = render(
        TRANSCRIPT_PROMPT_TEMPLATE,
        &[(
            "transcript_text",
            truncate_chars(transcript_text, TRANSCRIPT_EXCERPT_CHARS),
        )],
    );
    llm.call_json::<TranscriptSummary>(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Transcript extraction failed: {e}")))
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
