use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::history::AnalysisRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<AnalysisRecord>,
}

/// GET /api/history/:resume_id
/// Unknown ids yield an empty list rather than 404; the log outlives the in-memory resumes.
pub async fn history_handler(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let history = state.history.analysis_history(&resume_id).await?;
    Ok(Json(HistoryResponse { history }))
}
