use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::completion::CompletionResponse;
use super::prompt_template::PromptTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-session slots. Each write replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub prompt_template: Option<PromptTemplate>,
    pub latest_response: Option<CompletionResponse>,
    pub pending_translation: Option<String>,
}

impl SessionState {
    pub fn prompt_template_or_default(&self) -> PromptTemplate {
        self.prompt_template.clone().unwrap_or_default()
    }

    /// Stores the response and queues its reply for translation.
    pub fn record_completion(&mut self, response: CompletionResponse) {
        self.pending_translation = Some(response.reply().to_string());
        self.latest_response = Some(response);
    }
}
