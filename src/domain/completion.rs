use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Sampling temperature, bounded to the range the model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.1;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.7;

    pub fn new(value: f32) -> Result<Self, CompletionParamError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CompletionParamError::TemperatureOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaxTokens(NonZeroU32);

impl MaxTokens {
    pub const DEFAULT: u32 = 1000;

    pub fn new(value: u32) -> Result<Self, CompletionParamError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CompletionParamError::ZeroMaxTokens)
    }

    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

impl Default for MaxTokens {
    fn default() -> Self {
        Self(NonZeroU32::new(Self::DEFAULT).unwrap_or(NonZeroU32::MIN))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionParamError {
    #[error("temperature {0} outside 0.1..=1.0")]
    TemperatureOutOfRange(f32),
    #[error("max tokens must be positive")]
    ZeroMaxTokens,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: Temperature,
    pub max_tokens: MaxTokens,
}

impl CompletionRequest {
    pub fn new(prompt: String, temperature: Temperature, max_tokens: MaxTokens) -> Self {
        Self {
            prompt,
            temperature,
            max_tokens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub model: Option<String>,
    /// Absent when the endpoint does not report usage.
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    pub fn reply(&self) -> &str {
        self.text.trim()
    }
}
