mod blob_store;
mod completion_client;
mod session_store;
mod translator;

pub use blob_store::{BlobStore, StorageError};
pub use completion_client::{CompletionClient, CompletionError};
pub use session_store::{SessionStore, SessionStoreError};
pub use translator::{TranslationError, Translator};
