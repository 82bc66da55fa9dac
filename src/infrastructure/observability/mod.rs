mod init_tracing;
mod prompt_sanitizer;
mod request_context;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_context::{REQUEST_ID_HEADER, request_context_middleware};
pub use tracing_config::TracingConfig;
