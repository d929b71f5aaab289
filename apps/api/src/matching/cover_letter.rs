//! Cover letter generation.

use crate::errors::AppError;
use crate::llm_client::prompts::{join_limited, render, truncate_chars};
use crate::llm_client::LlmClient;
use crate::matching::prompts::{
    COVER_LETTER_COURSES, COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_RESUME_CHARS,
    JOB_DESCRIPTION_CHARS,
};
use crate::models::resume::{StoredResume, TranscriptSummary};

/// Academic line added to the cover letter guidelines.
fn academic_context(transcript: Option<&TranscriptSummary>) -> String {
    match transcript {
        Some(t) => format!(
            "\nAcademic: GPA {}, relevant courses: {}",
            t.gpa_display(),
            join_limited(&t.relevant_courses, COVER_LETTER_COURSES)
        ),
        None => String::new(),
    }
}

pub fn build_cover_letter_prompt(
    resume: &StoredResume,
    transcript: Option<&TranscriptSummary>,
    company: &str,
    job_description: &str,
) -> String {
    let academic = academic_context(transcript);
    render(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("company", company),
            ("transcript_context", academic.as_str()),
            (
                "resume_text",
                truncate_chars(&resume.text, COVER_LETTER_RESUME_CHARS),
            ),
            (
                "job_description",
                truncate_chars(job_description, JOB_DESCRIPTION_CHARS),
            ),
        ],
    )
}

/// Generates a plain-text cover letter.
pub async fn generate_cover_letter(
    llm: &LlmClient,
    resume: &StoredResume,
    transcript: Option<&TranscriptSummary>,
    company: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let prompt = build_cover_letter_prompt(resume, transcript, company, job_description);
    llm.complete(&prompt)
        .await
        .map(|letter| letter.trim().to_string())
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resume() -> StoredResume {
        StoredResume {
            text: "Led a migration of 40 dashboards to Tableau, cutting report time by 30%."
                .to_string(),
            skills: vec!["Tableau".to_string()],
            filename: "cv.pdf".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_prompt_names_company() {
        let prompt = build_cover_letter_prompt(&resume(), None, "Acme Corp", "Analyst role");
        assert!(prompt.contains("Show enthusiasm for Acme Corp"));
        assert!(prompt.contains("- Don't use placeholders\n"));
        assert!(prompt.contains("Led a migration of 40 dashboards"));
    }

    #[test]
    fn test_academic_context_limits_courses() {
        let transcript = TranscriptSummary {
            gpa: Some(3.5),
            relevant_courses: vec![
                "Databases".to_string(),
                "Statistics".to_string(),
                "Machine Learning".to_string(),
                "Compilers".to_string(),
            ],
            honors: vec![],
        };
        assert_eq!(
            academic_context(Some(&transcript)),
            "\nAcademic: GPA 3.5, relevant courses: Databases, Statistics, Machine Learning"
        );
    }

    #[test]
    fn test_company_braces_are_not_reexpanded() {
        let prompt = build_cover_letter_prompt(&resume(), None, "{resume_text}", "jd");
        assert!(prompt.contains("Show enthusiasm for {resume_text}"));
    }
}
