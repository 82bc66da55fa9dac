pub mod llm;
pub mod observability;
pub mod session;
pub mod storage;
pub mod translation;
