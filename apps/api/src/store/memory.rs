use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::resume::{StoredResume, TranscriptSummary};

#[derive(Default)]
struct Inner {
    resumes: HashMap<String, StoredResume>,
    transcripts: HashMap<String, TranscriptSummary>,
}

/// Process-lifetime store for uploaded resumes and their transcripts.
/// Cloning shares the same underlying maps.
#[derive(Clone, Default)]
pub struct ResumeStore {
    inner: Arc<RwLock<Inner>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a resume and returns its id, `resume_{n}` with n = stored count.
    pub async fn insert_resume(&self, resume: StoredResume) -> String {
        let mut inner = self.inner.write().await;
        let resume_id = format!("resume_{}", inner.resumes.len() + 1);
        inner.resumes.insert(resume_id.clone(), resume);
        resume_id
    }

    pub async fn resume(&self, resume_id: &str) -> Option<StoredResume> {
        self.inner.read().await.resumes.get(resume_id).cloned()
    }

    /// Stores (or replaces) the transcript attached to a resume id.
    pub async fn set_transcript(&self, resume_id: &str, transcript: TranscriptSummary) {
        self.inner
            .write()
            .await
            .transcripts
            .insert(resume_id.to_string(), transcript);
    }

    /// Resume and transcript under a single read lock.
    pub async fn resume_with_transcript(
        &self,
        resume_id: &str,
    ) -> Option<(StoredResume, Option<TranscriptSummary>)> {
        let inner = self.inner.read().await;
        let resume = inner.resumes.get(resume_id)?.clone();
        Some((resume, inner.transcripts.get(resume_id).cloned()))
    }
}
