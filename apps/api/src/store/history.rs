//! Flat-file history log of analyses and coach chats in one JSON document.
//!
//! Every write is a full read-modify-write of the document, serialized by an
//! async mutex and finished with a rename so readers never see a torn file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::history::{AnalysisRecord, ChatRecord, HistoryDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fields of a new analysis record; id and timestamp are assigned on append.
pub struct NewAnalysis<'a> {
    pub resume_id: &'a str,
    pub job_title: &'a str,
    pub company: &'a str,
    pub fit_score: u32,
    pub missing_skills: &'a [String],
}

#[derive(Clone)]
pub struct HistoryStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a job analysis and returns the stored record.
    pub async fn add_analysis(&self, new: NewAnalysis<'_>) -> Result<AnalysisRecord, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;

        let record = AnalysisRecord {
            id: doc.analyses.len() as u64 + 1,
            resume_id: new.resume_id.to_string(),
            job_title: new.job_title.to_string(),
            company: new.company.to_string(),
            fit_score: new.fit_score,
            missing_skills: new.missing_skills.to_vec(),
            timestamp: Utc::now(),
        };
        doc.analyses.push(record.clone());
        self.save(&doc).await?;

        info!(
            "Recorded analysis #{} for {} ({} at {})",
            record.id, record.resume_id, record.job_title, record.company
        );
        Ok(record)
    }

    /// All analyses for one resume, oldest first.
    pub async fn analysis_history(&self, resume_id: &str) -> Result<Vec<AnalysisRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        let doc = self.load().await?;
        Ok(doc
            .analyses
            .into_iter()
            .filter(|a| a.resume_id == resume_id)
            .collect())
    }

    /// Appends a coach exchange and returns the stored record.
    pub async fn add_chat_message(
        &self,
        user_message: &str,
        ai_response: &str,
    ) -> Result<ChatRecord, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;

        let record = ChatRecord {
            id: doc.chat_history.len() as u64 + 1,
            user_message: user_message.to_string(),
            ai_response: ai_response.to_string(),
            timestamp: Utc::now(),
        };
        doc.chat_history.push(record.clone());
        self.save(&doc).await?;

        debug!("Recorded chat message #{}", record.id);
        Ok(record)
    }

    /// The last `limit` chat records, oldest first.
    pub async fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        let skip = doc.chat_history.len().saturating_sub(limit);
        Ok(doc.chat_history.split_off(skip))
    }

    async fn load(&self) -> Result<HistoryDocument, StoreError> {
        let raw = match tokio::fs::read_to_string(self.path.as_ref()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HistoryDocument::default())
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.as_ref().clone(),
            source,
        })
    }

    async fn save(&self, doc: &HistoryDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Json {
            path: self.path.as_ref().clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, self.path.as_ref())
            .await
            .map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.as_ref().clone(),
            source,
        }
    }
}
