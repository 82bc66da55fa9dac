use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::TargetLanguage;

const API_VERSION: &str = "3.0";
const SOURCE_LANGUAGE: &str = "en";

/// Azure AI Translator text API, v3.
pub struct AzureTranslator {
    client: Client,
    endpoint: String,
    subscription_key: String,
    region: String,
}

#[derive(Serialize)]
struct TranslateItem<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateResult {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

impl AzureTranslator {
    pub fn new(endpoint: &str, subscription_key: &str, region: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/translate", endpoint.trim_end_matches('/')),
            subscription_key: subscription_key.to_string(),
            region: region.to_string(),
        }
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        let trace_id = Uuid::new_v4().to_string();
        tracing::debug!(endpoint = %self.endpoint, language = %target, trace_id = %trace_id, "Sending text to translator");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("api-version", API_VERSION),
                ("from", SOURCE_LANGUAGE),
                ("to", target.code()),
            ])
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .header("X-ClientTraceId", trace_id)
            .json(&[TranslateItem { text }])
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let results: Vec<TranslateResult> = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        results
            .into_iter()
            .next()
            .and_then(|r| r.translations.into_iter().next())
            .map(|t| t.text)
            .ok_or_else(|| TranslationError::InvalidResponse("no translation returned".to_string()))
    }
}
