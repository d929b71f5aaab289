use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::lenient::{lenient_f64, null_as_default};

/// A parsed resume held in memory for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResume {
    pub text: String,
    pub skills: Vec<String>,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Academic details pulled out of a transcript by the LLM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gpa: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevant_courses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub honors: Vec<String>,
}

impl TranscriptSummary {
    /// GPA as shown in prompts; `n/a` when the transcript had none.
    pub fn gpa_display(&self) -> String {
        self.gpa
            .map(|g| g.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    }
}
