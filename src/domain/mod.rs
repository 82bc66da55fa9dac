mod blob_name;
mod completion;
mod corpus;
mod cost;
mod document;
mod language;
mod prompt_template;
mod session;

pub use blob_name::{BlobName, InvalidBlobName};
pub use completion::{
    CompletionParamError, CompletionRequest, CompletionResponse, MaxTokens, Temperature,
    TokenUsage,
};
pub use corpus::CombinedCorpus;
pub use cost::{CostBreakdown, CostEstimate, CostPerToken};
pub use document::UploadedDocument;
pub use language::TargetLanguage;
pub use prompt_template::{PromptTemplate, TEMPLATE_PREAMBLE};
pub use session::{SessionId, SessionState};
