use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::{CompletionRequest, CompletionResponse, TokenUsage};

/// Azure OpenAI text-completion deployment.
pub struct AzureOpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionBodyResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

impl AzureOpenAiClient {
    pub fn new(
        api_base: &str,
        deployment: &str,
        api_key: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let endpoint = format!(
            "{}/openai/deployments/{}/completions?api-version={}",
            api_base.trim_end_matches('/'),
            deployment,
            api_version,
        );
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = CompletionBody {
            prompt: &request.prompt,
            temperature: request.temperature.value(),
            max_tokens: request.max_tokens.value(),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            temperature = body.temperature,
            max_tokens = body.max_tokens,
            "Sending completion request to Azure OpenAI"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::ApiRequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(CompletionError::Unauthorized(body));
            }
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionBodyResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("parse response: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| CompletionError::InvalidResponse("no choices returned".to_string()))?;

        tracing::info!(
            chars = text.len(),
            total_tokens = parsed.usage.map(|u| u.total_tokens),
            "Azure OpenAI completion finished"
        );

        Ok(CompletionResponse {
            text,
            model: parsed.model,
            usage: parsed.usage,
        })
    }
}
