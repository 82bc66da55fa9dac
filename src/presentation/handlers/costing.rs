use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::services::CostingQuery;
use crate::domain::{MaxTokens, PromptTemplate, SessionId, Temperature};
use crate::presentation::state::AppState;

use super::cost_table::CostReport;
use super::error::ApiError;

#[derive(Serialize)]
pub struct PromptResponse {
    pub prompt: PromptTemplate,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
pub struct CostingRequest {
    pub user_input: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

#[derive(Serialize)]
pub struct CostingResponse {
    pub reply: String,
    pub cost: CostReport,
}

fn prompt_response(state: &AppState, prompt: PromptTemplate) -> PromptResponse {
    let defaults = state.costing_service.defaults();
    PromptResponse {
        prompt,
        temperature: defaults.temperature.value(),
        max_tokens: defaults.max_tokens.value(),
    }
}

pub async fn costing_prompt_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state.costing_service.prompt_template(&session).await?;
    Ok(Json(prompt_response(&state, prompt)))
}

#[tracing::instrument(skip(state, session), fields(session = %session))]
pub async fn load_prompt_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .costing_service
        .load_corpus_into_template(&session)
        .await?;
    Ok(Json(prompt_response(&state, prompt)))
}

#[tracing::instrument(skip(state, request, session), fields(session = %session))]
pub async fn costing_generate_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(request): Json<CostingRequest>,
) -> Result<Json<CostingResponse>, ApiError> {
    let temperature = request
        .temperature
        .map(Temperature::new)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let max_tokens = request
        .max_tokens
        .map(MaxTokens::new)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let reply = state
        .costing_service
        .generate(
            &session,
            CostingQuery {
                user_input: request.user_input,
                prompt: request.prompt,
                temperature,
                max_tokens,
            },
        )
        .await?;

    Ok(Json(CostingResponse {
        reply: reply.reply,
        cost: CostReport::new(reply.estimate),
    }))
}
