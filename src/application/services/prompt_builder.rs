use crate::domain::{CombinedCorpus, PromptTemplate};

/// Chat page prompt: every uploaded document followed by the question.
pub fn build_chat_prompt(corpus: &CombinedCorpus, user_input: &str) -> String {
    format!("All Uploaded Data:\n{}\nUser Input: {}", corpus, user_input)
}

/// Costing page prompt: the editable template followed by the question.
pub fn build_costing_prompt(template: &PromptTemplate, user_input: &str) -> String {
    format!("{}\nUser Input: {}", template, user_input)
}
