use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobBoard;
use crate::learning_path::LearningPathGenerator;
use crate::llm_client::LlmClient;
use crate::store::{HistoryStore, ResumeStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    pub resumes: ResumeStore,
    pub history: HistoryStore,
    /// Adzuna when credentials are configured, demo listings otherwise.
    pub job_board: Arc<dyn JobBoard>,
    pub learning_paths: Arc<LearningPathGenerator>,
}
