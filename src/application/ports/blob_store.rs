use async_trait::async_trait;

use crate::domain::{BlobName, UploadedDocument};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Container the blobs live in, used in user-facing confirmations.
    fn container(&self) -> &str;

    /// Writes the document under its name, replacing any existing blob.
    async fn upload(&self, document: &UploadedDocument) -> Result<BlobName, StorageError>;

    /// Blob names in backend order.
    async fn list(&self) -> Result<Vec<BlobName>, StorageError>;

    async fn read(&self, name: &BlobName) -> Result<String, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("upload of '{name}' failed: {reason}")]
    UploadFailed { name: String, reason: String },
    #[error("listing blobs failed: {0}")]
    ListFailed(String),
    #[error("invalid blob name: {0}")]
    InvalidName(String),
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("blob '{0}' is not valid UTF-8")]
    InvalidUtf8(String),
    #[error("storage misconfigured: {0}")]
    Configuration(String),
}

impl StorageError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::UploadFailed { .. } | Self::ListFailed(_) | Self::DownloadFailed(_)
        )
    }
}
