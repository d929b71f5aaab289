use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job comparison, as written to the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub resume_id: String,
    pub job_title: String,
    pub company: String,
    pub fit_score: u32,
    pub missing_skills: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// One coach exchange, as written to the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: u64,
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
}

/// The whole on-disk history document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryDocument {
    /// Not written by this service; carried through rewrites untouched.
    #[serde(default)]
    pub resumes: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub analyses: Vec<AnalysisRecord>,
    #[serde(default)]
    pub chat_history: Vec<ChatRecord>,
}
