use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, StorageError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_blob_store::ObjectBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, StorageError> {
        let container = settings.container.as_str();
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = ObjectBlobStore::local(PathBuf::from(&settings.local_path), container)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(ObjectBlobStore::in_memory(container))),
            StorageProviderSetting::Azure => {
                let url = settings.account_url.as_deref().ok_or_else(|| {
                    StorageError::Configuration("storage.account_url required".into())
                })?;
                let key = settings.access_key.as_deref().ok_or_else(|| {
                    StorageError::Configuration("storage.access_key required".into())
                })?;
                let store = ObjectBlobStore::azure(url, key, container)?;
                Ok(Arc::new(store))
            }
        }
    }
}
