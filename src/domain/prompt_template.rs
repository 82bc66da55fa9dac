use std::fmt;

use serde::{Deserialize, Serialize};

use super::corpus::CombinedCorpus;

pub const TEMPLATE_PREAMBLE: &str = "You are a Azure Bot and you have certain information available to you. You only have to reply based on that information and for the rest of the stuff you need to Answer I don't know.  Here is the information below:\n\n";

const DATA_PLACEHOLDER: &str = "[Your data here]";

/// Free-edit system prompt used by the costing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn with_corpus(corpus: &CombinedCorpus) -> Self {
        Self(format!("{}{}\n", TEMPLATE_PREAMBLE, corpus))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self(format!("{}{}\n", TEMPLATE_PREAMBLE, DATA_PLACEHOLDER))
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
