//! Resume vs job description comparison.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::learning_path::LearningPlanEntry;
use crate::llm_client::prompts::{render, truncate_chars};
use crate::llm_client::LlmClient;
use crate::matching::prompts::{
    COMPARE_PROMPT_TEMPLATE, COMPARE_RESUME_CHARS, JOB_DESCRIPTION_CHARS,
};
use crate::models::lenient::null_as_default;
use crate::models::resume::{StoredResume, TranscriptSummary};

/// The LLM's verdict on how a resume fits a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// 0 – 100
    #[serde(default, deserialize_with = "deserialize_score")]
    pub fit_score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matching_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: String,
}

/// Comparison plus the study plan for its missing skills.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    #[serde(flatten)]
    pub comparison: ComparisonResult,
    pub learning_path: Vec<LearningPlanEntry>,
}

/// Accepts any JSON number (rounded, clamped to 0–100) or a numeric string like `"80%"`.
fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score
        .filter(|s| s.is_finite())
        .map(|s| s.round().clamp(0.0, 100.0) as u32)
        .unwrap_or(0))
}

/// Transcript line appended to the resume skills in the comparison prompt.
pub fn transcript_context(transcript: Option<&TranscriptSummary>) -> String {
    match transcript {
        Some(t) => format!(
            "\nTranscript Data: GPA: {}, Courses: {}",
            t.gpa_display(),
            t.relevant_courses.join(", ")
        ),
        None => String::new(),
    }
}

pub fn build_compare_prompt(
    resume: &StoredResume,
    transcript: Option<&TranscriptSummary>,
    job_description: &str,
) -> String {
    let resume_skills = resume.skills.join(", ");
    let transcript_context = transcript_context(transcript);
    render(
        COMPARE_PROMPT_TEMPLATE,
        &[
            ("resume_skills", resume_skills.as_str()),
            ("transcript_context", transcript_context.as_str()),
            ("resume_text", truncate_chars(&resume.text, COMPARE_RESUME_CHARS)),
            (
                "job_description",
                truncate_chars(job_description, JOB_DESCRIPTION_CHARS),
            ),
        ],
    )
}

/// Asks the LLM to compare a resume with a job description.
pub async fn compare_resume(
    llm: &LlmClient,
    resume: &StoredResume,
    transcript: Option<&TranscriptSummary>,
    job_description: &str,
) -> Result<ComparisonResult, AppError> {
    let prompt = build_compare_prompt(resume, transcript, job_description);
    llm.call_json::<ComparisonResult>(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Job comparison failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resume() -> StoredResume {
        StoredResume {
            text: "Data analyst with five years of SQL reporting experience.".to_string(),
            skills: vec!["SQL".to_string(), "Python".to_string()],
            filename: "cv.pdf".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_comparison_deserializes_llm_reply() {
        let json = r#"{
            "fit_score": 75,
            "missing_skills": ["Tableau", "Statistics"],
            "matching_skills": ["Python", "SQL"],
            "recommendation": "Learn Tableau."
        }"#;
        let result: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.fit_score, 75);
        assert_eq!(result.missing_skills, vec!["Tableau", "Statistics"]);
        assert_eq!(result.recommendation, "Learn Tableau.");
    }

    #[test]
    fn test_fit_score_tolerates_floats_strings_and_junk() {
        let score = |raw: &str| {
            serde_json::from_str::<ComparisonResult>(&format!(r#"{{"fit_score": {raw}}}"#))
                .unwrap()
                .fit_score
        };
        assert_eq!(score("82.6"), 83);
        assert_eq!(score(r#""80%""#), 80);
        assert_eq!(score("140"), 100);
        assert_eq!(score("-5"), 0);
        assert_eq!(score("null"), 0);
        assert_eq!(score(r#""high""#), 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let result: ComparisonResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let json = r#"{
            "fit_score": 90,
            "missing_skills": null,
            "matching_skills": ["SQL"],
            "recommendation": null
        }"#;
        let result: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.fit_score, 90);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.matching_skills, vec!["SQL"]);
        assert_eq!(result.recommendation, "");
    }

    #[test]
    fn test_report_flattens_comparison() {
        let report = ComparisonReport {
            comparison: ComparisonResult {
                fit_score: 60,
                missing_skills: vec!["SQL".to_string()],
                matching_skills: vec![],
                recommendation: "ok".to_string(),
            },
            learning_path: vec![],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["fit_score"], 60);
        assert_eq!(value["missing_skills"][0], "SQL");
        assert!(value["learning_path"].as_array().unwrap().is_empty());
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn test_transcript_context() {
        assert_eq!(transcript_context(None), "");
        let transcript = TranscriptSummary {
            gpa: Some(3.75),
            relevant_courses: vec!["Databases".to_string(), "Statistics".to_string()],
            honors: vec![],
        };
        assert_eq!(
            transcript_context(Some(&transcript)),
            "\nTranscript Data: GPA: 3.75, Courses: Databases, Statistics"
        );
    }

    #[test]
    fn test_compare_prompt_truncates_and_includes_skills() {
        let jd = "j".repeat(5000);
        let prompt = build_compare_prompt(&resume(), None, &jd);
        assert!(prompt.contains("Resume Skills: SQL, Python\n"));
        assert!(prompt.contains(&"j".repeat(JOB_DESCRIPTION_CHARS)));
        assert!(!prompt.contains(&"j".repeat(JOB_DESCRIPTION_CHARS + 1)));
        assert!(prompt.contains("\"fit_score\": 75"));
    }
}
