use crate::domain::{MaxTokens, Temperature};

/// Parameters applied when a caller does not choose its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionDefaults {
    pub temperature: Temperature,
    pub max_tokens: MaxTokens,
}
