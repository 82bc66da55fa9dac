use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::{SessionId, TargetLanguage};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::cost_table::CostReport;
use super::error::ApiError;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub language: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub language: TargetLanguage,
    pub text: String,
}

#[tracing::instrument(skip(state, request, session), fields(session = %session))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    tracing::debug!(user_input = %sanitize_prompt(&request.user_input), "Processing chat request");

    let reply = state
        .chat_service
        .generate(&session, &request.user_input)
        .await?;

    Ok(Json(ChatResponse { reply: reply.reply }))
}

#[tracing::instrument(skip(state, request, session), fields(session = %session))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let language = TargetLanguage::from_code(&request.language).ok_or_else(|| {
        ApiError::BadRequest(format!("Unsupported language: {}", request.language))
    })?;

    let text = state
        .chat_service
        .translate_latest(&session, language)
        .await?;

    Ok(Json(TranslateResponse { language, text }))
}

pub async fn session_cost_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<CostReport>, ApiError> {
    let estimate = state.chat_service.latest_cost(&session).await?;
    Ok(Json(CostReport::new(estimate)))
}
