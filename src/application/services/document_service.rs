use std::sync::Arc;

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::{BlobName, CombinedCorpus, UploadedDocument};

pub struct DocumentService {
    store: Arc<dyn BlobStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub fn container(&self) -> &str {
        self.store.container()
    }

    #[tracing::instrument(skip(self, document), fields(name = %document.name, bytes = document.size_bytes()))]
    pub async fn upload(&self, document: &UploadedDocument) -> Result<BlobName, DocumentError> {
        if !document.name.is_text_file() {
            return Err(DocumentError::UnsupportedFileType(
                document.name.to_string(),
            ));
        }

        let name = self.store.upload(document).await?;
        tracing::info!(container = %self.store.container(), name = %name, "Document uploaded");
        Ok(name)
    }

    /// Lists stored documents. Backend failures degrade to an empty list.
    pub async fn list(&self) -> Vec<BlobName> {
        match self.store.list().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, container = %self.store.container(), "Error listing blob files");
                Vec::new()
            }
        }
    }

    pub async fn read(&self, name: &BlobName) -> Result<String, DocumentError> {
        Ok(self.store.read(name).await?)
    }

    /// Reads every listed document and joins the texts in listing order.
    #[tracing::instrument(skip(self))]
    pub async fn corpus(&self) -> Result<CombinedCorpus, DocumentError> {
        let names = self.list().await;
        let mut texts = Vec::with_capacity(names.len());
        for name in &names {
            texts.push(self.read(name).await?);
        }

        let corpus = CombinedCorpus::from_texts(texts);
        tracing::debug!(
            documents = names.len(),
            chars = corpus.as_str().len(),
            "Corpus assembled"
        );
        Ok(corpus)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("only .txt files are accepted: {0}")]
    UnsupportedFileType(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
