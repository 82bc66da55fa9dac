use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use docprompt::application::ports::{
    BlobStore, CompletionClient, CompletionError, SessionStore, StorageError, TranslationError,
    Translator,
};
use docprompt::application::services::{
    ChatService, CompletionDefaults, CostingService, DocumentService,
};
use docprompt::domain::{
    BlobName, CompletionRequest, CompletionResponse, CostPerToken, TargetLanguage, TokenUsage,
    UploadedDocument,
};
use docprompt::infrastructure::session::InMemorySessionStore;
use docprompt::infrastructure::storage::ObjectBlobStore;
use docprompt::presentation::{AppState, UiSettings, create_router};

pub const TEST_CONTAINER: &str = "test-container";

/// Replies with a fixed text and records every prompt it receives.
pub struct RecordingCompletionClient {
    pub reply: String,
    pub usage: Option<TokenUsage>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingCompletionClient {
    pub fn new(reply: &str, usage: Option<TokenUsage>) -> Self {
        Self {
            reply: reply.to_string(),
            usage,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for RecordingCompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        Ok(CompletionResponse {
            text: format!("  {} #{}\n", self.reply, index),
            model: Some("test-model".to_string()),
            usage: self.usage,
        })
    }
}

pub struct FailingCompletionClient;

#[async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        Err(CompletionError::RateLimited)
    }
}

/// Prefixes the text with the target code so tests can see what was sent.
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        Ok(format!("[{}] {}", target.code(), text))
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::InvalidResponse("missing translations".to_string()))
    }
}

/// Every operation fails as if the backend were unreachable.
pub struct UnreachableBlobStore;

#[async_trait]
impl BlobStore for UnreachableBlobStore {
    fn container(&self) -> &str {
        TEST_CONTAINER
    }

    async fn upload(&self, document: &UploadedDocument) -> Result<BlobName, StorageError> {
        Err(StorageError::UploadFailed {
            name: document.name.to_string(),
            reason: "connection refused".to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<BlobName>, StorageError> {
        Err(StorageError::ListFailed("connection refused".to_string()))
    }

    async fn read(&self, name: &BlobName) -> Result<String, StorageError> {
        Err(StorageError::DownloadFailed(name.to_string()))
    }
}

/// In-memory container that refuses to store one particular name.
pub struct RejectingBlobStore {
    pub inner: ObjectBlobStore,
    pub rejected: String,
}

impl RejectingBlobStore {
    pub fn new(rejected: &str) -> Self {
        Self {
            inner: ObjectBlobStore::in_memory(TEST_CONTAINER),
            rejected: rejected.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for RejectingBlobStore {
    fn container(&self) -> &str {
        self.inner.container()
    }

    async fn upload(&self, document: &UploadedDocument) -> Result<BlobName, StorageError> {
        if document.name.as_str() == self.rejected {
            return Err(StorageError::UploadFailed {
                name: self.rejected.clone(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.inner.upload(document).await
    }

    async fn list(&self) -> Result<Vec<BlobName>, StorageError> {
        self.inner.list().await
    }

    async fn read(&self, name: &BlobName) -> Result<String, StorageError> {
        self.inner.read(name).await
    }
}

pub fn usage(prompt_tokens: u32, completion_tokens: u32) -> TokenUsage {
    TokenUsage {
        prompt_tokens,
        completion_tokens,
        total_tokens: prompt_tokens + completion_tokens,
    }
}

pub fn name(value: &str) -> BlobName {
    BlobName::new(value).unwrap()
}

pub fn document(file: &str, content: &str) -> UploadedDocument {
    UploadedDocument::new(name(file), content.to_string())
}

pub struct TestServices {
    pub documents: Arc<DocumentService>,
    pub chat: Arc<ChatService>,
    pub costing: Arc<CostingService>,
    pub sessions: Arc<InMemorySessionStore>,
}

pub fn services_with(
    store: Arc<dyn BlobStore>,
    completion_client: Arc<dyn CompletionClient>,
    translator: Arc<dyn Translator>,
) -> TestServices {
    let sessions = Arc::new(InMemorySessionStore::new());
    let session_store: Arc<dyn SessionStore> = sessions.clone();
    let documents = Arc::new(DocumentService::new(store));

    let chat = Arc::new(ChatService::new(
        Arc::clone(&documents),
        Arc::clone(&completion_client),
        translator,
        Arc::clone(&session_store),
        CompletionDefaults::default(),
        CostPerToken::default(),
    ));
    let costing = Arc::new(CostingService::new(
        Arc::clone(&documents),
        completion_client,
        session_store,
        CompletionDefaults::default(),
        CostPerToken::default(),
    ));

    TestServices {
        documents,
        chat,
        costing,
        sessions,
    }
}

pub fn in_memory_services(completion_client: Arc<dyn CompletionClient>) -> TestServices {
    services_with(
        Arc::new(ObjectBlobStore::in_memory(TEST_CONTAINER)),
        completion_client,
        Arc::new(EchoTranslator),
    )
}

pub fn create_test_app_with(services: &TestServices, ui: UiSettings) -> axum::Router {
    create_router(AppState {
        document_service: Arc::clone(&services.documents),
        chat_service: Arc::clone(&services.chat),
        costing_service: Arc::clone(&services.costing),
        ui,
    })
}
