//! Axum route handler for the career coach chat.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coach::prompts::{COACH_CONTEXT_SKILLS, COACH_HISTORY_TURNS, COACH_SYSTEM_PROMPT};
use crate::errors::AppError;
use crate::llm_client::prompts::{join_limited, truncate_chars};
use crate::llm_client::ChatMessage;
use crate::models::history::ChatRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub resume_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// System prompt, replayed history as user/assistant turns, then the new message.
pub fn build_conversation(
    skills: Option<&[String]>,
    history: &[ChatRecord],
    message: &str,
) -> Vec<ChatMessage> {
    let mut system = COACH_SYSTEM_PROMPT.to_string();
    if let Some(skills) = skills {
        system.push_str("\n\nUser's skills: ");
        system.push_str(&join_limited(skills, COACH_CONTEXT_SKILLS));
    }

    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(ChatMessage::system(system));
    for record in history {
        messages.push(ChatMessage::user(record.user_message.as_str()));
        messages.push(ChatMessage::assistant(record.ai_response.as_str()));
    }
    messages.push(ChatMessage::user(message));
    messages
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    info!("Chat message: {}", truncate_chars(&request.message, 50));

    // An unknown resume_id just means no skills context.
    let resume = match request.resume_id.as_deref() {
        Some(id) => state.resumes.resume(id).await,
        None => None,
    };

    let history = state.history.recent_chats(COACH_HISTORY_TURNS).await?;
    let messages = build_conversation(
        resume.as_ref().map(|r| r.skills.as_slice()),
        &history,
        &request.message,
    );

    let response = state
        .llm
        .chat(&messages)
        .await
        .map_err(|e| AppError::Llm(format!("Career chat failed: {e}")))?;

    state
        .history
        .add_chat_message(&request.message, &response)
        .await?;

    Ok(Json(ChatResponse { response }))
}
