mod chat_service;
mod completion_defaults;
mod cost_estimator;
mod costing_service;
mod document_service;
mod prompt_builder;

pub use chat_service::{ChatError, ChatReply, ChatService};
pub use completion_defaults::CompletionDefaults;
pub use cost_estimator::estimate_cost;
pub use costing_service::{CostingError, CostingQuery, CostingReply, CostingService};
pub use document_service::{DocumentError, DocumentService};
pub use prompt_builder::{build_chat_prompt, build_costing_prompt};
