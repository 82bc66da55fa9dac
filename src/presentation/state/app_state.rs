use std::sync::Arc;

use crate::application::services::{ChatService, CostingService, DocumentService};
use crate::presentation::config::UiSettings;

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub chat_service: Arc<ChatService>,
    pub costing_service: Arc<CostingService>,
    pub ui: UiSettings,
}
