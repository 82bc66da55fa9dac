use async_trait::async_trait;

use crate::domain::{CompletionRequest, CompletionResponse};

/// Single synchronous text completion; no streaming, no retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("rate limited")]
    RateLimited,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("completion client misconfigured: {0}")]
    Configuration(String),
}

impl CompletionError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiRequestFailed(_) | Self::RateLimited | Self::Timeout => true,
            Self::Upstream { status, .. } => *status >= 500,
            Self::Unauthorized(_) | Self::InvalidResponse(_) | Self::Configuration(_) => false,
        }
    }
}
