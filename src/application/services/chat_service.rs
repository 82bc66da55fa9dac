use std::sync::Arc;

use crate::application::ports::{
    CompletionClient, CompletionError, SessionStore, SessionStoreError, Translator,
};
use crate::domain::{CompletionRequest, CostEstimate, CostPerToken, SessionId, TargetLanguage};
use crate::infrastructure::observability::sanitize_prompt;

use super::completion_defaults::CompletionDefaults;
use super::cost_estimator::estimate_cost;
use super::document_service::{DocumentError, DocumentService};
use super::prompt_builder::build_chat_prompt;

pub struct ChatService {
    documents: Arc<DocumentService>,
    completion_client: Arc<dyn CompletionClient>,
    translator: Arc<dyn Translator>,
    sessions: Arc<dyn SessionStore>,
    defaults: CompletionDefaults,
    cost_per_token: CostPerToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    pub prompt_chars: usize,
}

impl ChatService {
    pub fn new(
        documents: Arc<DocumentService>,
        completion_client: Arc<dyn CompletionClient>,
        translator: Arc<dyn Translator>,
        sessions: Arc<dyn SessionStore>,
        defaults: CompletionDefaults,
        cost_per_token: CostPerToken,
    ) -> Self {
        Self {
            documents,
            completion_client,
            translator,
            sessions,
            defaults,
            cost_per_token,
        }
    }

    /// Answers `user_input` grounded on every stored document and makes the
    /// reply the session's translation source.
    #[tracing::instrument(skip(self, user_input, session), fields(session = %session))]
    pub async fn generate(
        &self,
        session: &SessionId,
        user_input: &str,
    ) -> Result<ChatReply, ChatError> {
        let corpus = self.documents.corpus().await?;
        let prompt = build_chat_prompt(&corpus, user_input);
        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Requesting chat completion");

        let request =
            CompletionRequest::new(prompt, self.defaults.temperature, self.defaults.max_tokens);
        let prompt_chars = request.prompt.len();
        let response = self.completion_client.complete(&request).await?;
        let reply = response.reply().to_string();

        let mut state = self.sessions.load(session).await?;
        state.record_completion(response);
        self.sessions.save(session, state).await?;

        tracing::info!(reply_chars = reply.len(), "Chat completion stored");
        Ok(ChatReply {
            reply,
            prompt_chars,
        })
    }

    /// Translates the most recent reply. Translation failures come back as
    /// the error text in place of a translation.
    #[tracing::instrument(skip(self, session), fields(session = %session))]
    pub async fn translate_latest(
        &self,
        session: &SessionId,
        target: TargetLanguage,
    ) -> Result<String, ChatError> {
        let state = self.sessions.load(session).await?;
        let Some(text) = state.pending_translation else {
            tracing::info!("Translate requested before any reply was generated");
            return Err(ChatError::NothingToTranslate);
        };

        match self.translator.translate(&text, target).await {
            Ok(translated) => {
                tracing::info!(language = %target, chars = translated.len(), "Reply translated");
                Ok(translated)
            }
            Err(e) => {
                tracing::warn!(error = %e, language = %target, "Translation failed");
                Ok(e.to_string())
            }
        }
    }

    /// Prices the session's latest completion.
    pub async fn latest_cost(&self, session: &SessionId) -> Result<CostEstimate, ChatError> {
        let state = self.sessions.load(session).await?;
        let response = state.latest_response.ok_or(ChatError::NoResponseYet)?;
        Ok(estimate_cost(&response, self.cost_per_token))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("documents: {0}")]
    Documents(#[from] DocumentError),
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
    #[error("session: {0}")]
    Session(#[from] SessionStoreError),
    #[error("no reply to translate yet")]
    NothingToTranslate,
    #[error("no response generated yet")]
    NoResponseYet,
}
