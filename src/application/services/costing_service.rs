use std::sync::Arc;

use crate::application::ports::{
    CompletionClient, CompletionError, SessionStore, SessionStoreError,
};
use crate::domain::{
    CompletionRequest, CostEstimate, CostPerToken, MaxTokens, PromptTemplate, SessionId,
    Temperature,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::completion_defaults::CompletionDefaults;
use super::cost_estimator::estimate_cost;
use super::document_service::{DocumentError, DocumentService};
use super::prompt_builder::build_costing_prompt;

pub struct CostingService {
    documents: Arc<DocumentService>,
    completion_client: Arc<dyn CompletionClient>,
    sessions: Arc<dyn SessionStore>,
    defaults: CompletionDefaults,
    cost_per_token: CostPerToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostingQuery {
    pub user_input: String,
    /// Edited template text; the session's template is used when absent.
    pub prompt: Option<String>,
    pub temperature: Option<Temperature>,
    pub max_tokens: Option<MaxTokens>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostingReply {
    pub reply: String,
    pub estimate: CostEstimate,
}

impl CostingService {
    pub fn new(
        documents: Arc<DocumentService>,
        completion_client: Arc<dyn CompletionClient>,
        sessions: Arc<dyn SessionStore>,
        defaults: CompletionDefaults,
        cost_per_token: CostPerToken,
    ) -> Self {
        Self {
            documents,
            completion_client,
            sessions,
            defaults,
            cost_per_token,
        }
    }

    pub fn defaults(&self) -> CompletionDefaults {
        self.defaults
    }

    pub async fn prompt_template(
        &self,
        session: &SessionId,
    ) -> Result<PromptTemplate, CostingError> {
        let mut state = self.sessions.load(session).await?;
        if let Some(template) = &state.prompt_template {
            return Ok(template.clone());
        }

        let template = PromptTemplate::default();
        state.prompt_template = Some(template.clone());
        self.sessions.save(session, state).await?;
        Ok(template)
    }

    /// Replaces the session template with one embedding the current corpus.
    #[tracing::instrument(skip(self, session), fields(session = %session))]
    pub async fn load_corpus_into_template(
        &self,
        session: &SessionId,
    ) -> Result<PromptTemplate, CostingError> {
        let corpus = self.documents.corpus().await?;
        let template = PromptTemplate::with_corpus(&corpus);

        let mut state = self.sessions.load(session).await?;
        state.prompt_template = Some(template.clone());
        self.sessions.save(session, state).await?;

        tracing::info!(chars = template.as_str().len(), "Corpus loaded into prompt template");
        Ok(template)
    }

    #[tracing::instrument(skip(self, query, session), fields(session = %session))]
    pub async fn generate(
        &self,
        session: &SessionId,
        query: CostingQuery,
    ) -> Result<CostingReply, CostingError> {
        let mut state = self.sessions.load(session).await?;
        let template = match query.prompt {
            Some(edited) => {
                let template = PromptTemplate::new(edited);
                state.prompt_template = Some(template.clone());
                self.sessions.save(session, state).await?;
                template
            }
            None => state.prompt_template_or_default(),
        };

        let prompt = build_costing_prompt(&template, &query.user_input);
        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Requesting costed completion");

        let request = CompletionRequest::new(
            prompt,
            query.temperature.unwrap_or(self.defaults.temperature),
            query.max_tokens.unwrap_or(self.defaults.max_tokens),
        );
        let response = self.completion_client.complete(&request).await?;
        let estimate = estimate_cost(&response, self.cost_per_token);

        tracing::info!(
            estimated_cost = estimate.value(),
            temperature = request.temperature.value(),
            max_tokens = request.max_tokens.value(),
            "Costed completion finished"
        );

        Ok(CostingReply {
            reply: response.reply().to_string(),
            estimate,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error("documents: {0}")]
    Documents(#[from] DocumentError),
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
    #[error("session: {0}")]
    Session(#[from] SessionStoreError),
}
