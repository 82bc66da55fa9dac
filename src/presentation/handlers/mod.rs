mod chat;
mod cost_table;
mod costing;
mod documents;
mod error;
mod health;
mod pages;

pub use chat::{chat_handler, session_cost_handler, translate_handler};
pub use cost_table::{CURRENCY_NOTE, CostReport, CostRow};
pub use costing::{costing_generate_handler, costing_prompt_handler, load_prompt_handler};
pub use documents::{list_documents_handler, upload_documents_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use pages::{index_handler, languages_handler, pages_handler};
