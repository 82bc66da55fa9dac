use std::path::PathBuf;
use std::sync::Arc;

use futures::TryStreamExt;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::{BlobName, UploadedDocument};

/// Blob container backed by any `object_store` implementation.
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
    container: String,
}

impl ObjectBlobStore {
    pub fn azure(
        account_url: &str,
        access_key: &str,
        container: &str,
    ) -> Result<Self, StorageError> {
        let store = MicrosoftAzureBuilder::new()
            .with_url(account_url.trim_end_matches('/'))
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            container: container.to_string(),
        })
    }

    /// Stores blobs as files under `base_path/container`.
    pub fn local(base_path: PathBuf, container: &str) -> Result<Self, StorageError> {
        let root = base_path.join(container);
        std::fs::create_dir_all(&root)
            .map_err(|e| StorageError::Configuration(format!("{}: {}", root.display(), e)))?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(fs),
            container: container.to_string(),
        })
    }

    pub fn in_memory(container: &str) -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
            container: container.to_string(),
        }
    }
}

/// Parses rather than encodes, so listed locations match uploaded names.
fn store_path(name: &BlobName) -> Result<StorePath, StorageError> {
    StorePath::parse(name.as_str()).map_err(|e| StorageError::InvalidName(e.to_string()))
}

#[async_trait::async_trait]
impl BlobStore for ObjectBlobStore {
    fn container(&self) -> &str {
        &self.container
    }

    async fn upload(&self, document: &UploadedDocument) -> Result<BlobName, StorageError> {
        let location = store_path(&document.name)?;
        self.inner
            .put(&location, PutPayload::from(document.content.clone()))
            .await
            .map_err(|e| StorageError::UploadFailed {
                name: document.name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(document.name.clone())
    }

    async fn list(&self) -> Result<Vec<BlobName>, StorageError> {
        let objects: Vec<_> = self
            .inner
            .list(None)
            .try_collect()
            .await
            .map_err(|e| StorageError::ListFailed(e.to_string()))?;

        objects
            .into_iter()
            .map(|meta| {
                BlobName::new(String::from(meta.location))
                    .map_err(|e| StorageError::ListFailed(e.to_string()))
            })
            .collect()
    }

    async fn read(&self, name: &BlobName) -> Result<String, StorageError> {
        let location = store_path(name)?;
        let result = self.inner.get(&location).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => StorageError::NotFound(name.to_string()),
            other => StorageError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        String::from_utf8(bytes.to_vec()).map_err(|_| StorageError::InvalidUtf8(name.to_string()))
    }
}
