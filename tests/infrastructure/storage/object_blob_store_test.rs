use docprompt::application::ports::{BlobStore, StorageError};
use docprompt::domain::UploadedDocument;
use docprompt::infrastructure::storage::{BlobStoreFactory, ObjectBlobStore};
use docprompt::presentation::config::{StorageProviderSetting, StorageSettings};

use crate::helpers::{document, name};

fn create_local_store() -> (tempfile::TempDir, ObjectBlobStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ObjectBlobStore::local(dir.path().to_path_buf(), "docs").unwrap();
    (dir, store)
}

fn storage_settings(provider: StorageProviderSetting, local_path: &str) -> StorageSettings {
    StorageSettings {
        provider,
        container: "docs".to_string(),
        account_url: None,
        access_key: None,
        local_path: local_path.to_string(),
    }
}

#[tokio::test]
async fn given_document_when_uploading_then_returns_stored_name() {
    let (_dir, store) = create_local_store();

    let stored = store.upload(&document("a.txt", "hello")).await.unwrap();

    assert_eq!(stored, name("a.txt"));
}

#[tokio::test]
async fn given_uploaded_document_when_reading_then_text_matches() {
    let (_dir, store) = create_local_store();
    store.upload(&document("a.txt", "hello world")).await.unwrap();

    assert_eq!(store.read(&name("a.txt")).await.unwrap(), "hello world");
}

#[tokio::test]
async fn given_same_name_twice_when_uploading_then_second_write_wins() {
    let (_dir, store) = create_local_store();
    store.upload(&document("a.txt", "v1")).await.unwrap();
    store.upload(&document("a.txt", "v2")).await.unwrap();

    assert_eq!(store.read(&name("a.txt")).await.unwrap(), "v2");
    assert_eq!(store.list().await.unwrap(), vec![name("a.txt")]);
}

#[tokio::test]
async fn given_several_documents_when_listing_then_every_name_is_returned() {
    let (_dir, store) = create_local_store();
    for file in ["x.txt", "y.txt", "z.txt"] {
        store.upload(&document(file, "data")).await.unwrap();
    }

    let mut names = store.list().await.unwrap();
    names.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    assert_eq!(names, vec![name("x.txt"), name("y.txt"), name("z.txt")]);
}

#[tokio::test]
async fn given_missing_blob_when_reading_then_returns_not_found() {
    let (_dir, store) = create_local_store();

    let result = store.read(&name("missing.txt")).await;

    assert!(matches!(result, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn given_invalid_utf8_blob_when_reading_then_returns_decode_error() {
    let store = ObjectBlobStore::in_memory("docs");
    let bad = UploadedDocument::new(name("bad.txt"), vec![0xff, 0xfe, 0xfd]);
    store.upload(&bad).await.unwrap();

    let result = store.read(&name("bad.txt")).await;

    assert!(matches!(result, Err(StorageError::InvalidUtf8(_))));
}

#[tokio::test]
async fn given_in_memory_store_when_listing_then_names_are_sorted() {
    let store = ObjectBlobStore::in_memory("docs");
    store.upload(&document("b.txt", "2")).await.unwrap();
    store.upload(&document("a.txt", "1")).await.unwrap();

    assert_eq!(
        store.list().await.unwrap(),
        vec![name("a.txt"), name("b.txt")]
    );
}

#[test]
fn given_store_when_asking_container_then_returns_configured_name() {
    let store = ObjectBlobStore::in_memory("docs");
    assert_eq!(store.container(), "docs");
}

#[test]
fn given_azure_provider_without_account_url_when_creating_then_returns_configuration_error() {
    let settings = storage_settings(StorageProviderSetting::Azure, "./unused");

    let result = BlobStoreFactory::create(&settings);

    assert!(matches!(result, Err(StorageError::Configuration(_))));
}

#[tokio::test]
async fn given_local_provider_when_creating_then_store_round_trips() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = storage_settings(
        StorageProviderSetting::Local,
        dir.path().to_str().unwrap(),
    );

    let store = BlobStoreFactory::create(&settings).unwrap();
    store.upload(&document("f.txt", "local")).await.unwrap();

    assert_eq!(store.read(&name("f.txt")).await.unwrap(), "local");
    assert!(dir.path().join("docs").join("f.txt").exists());
}

#[test]
fn given_storage_errors_when_classifying_then_only_transient_ones_are_retryable() {
    assert!(StorageError::ListFailed("x".into()).is_retryable());
    assert!(StorageError::DownloadFailed("x".into()).is_retryable());
    assert!(!StorageError::NotFound("x".into()).is_retryable());
    assert!(!StorageError::InvalidUtf8("x".into()).is_retryable());
    assert!(!StorageError::Configuration("x".into()).is_retryable());
}

#[tokio::test]
async fn given_name_with_reserved_characters_when_listing_then_name_round_trips_to_read() {
    let store = ObjectBlobStore::in_memory("docs");
    store
        .upload(&document("notes[1].txt", "bracketed"))
        .await
        .unwrap();
    store
        .upload(&document("50% off #2.txt", "percent"))
        .await
        .unwrap();

    let names = store.list().await.unwrap();

    assert_eq!(names, vec![name("50% off #2.txt"), name("notes[1].txt")]);
    assert_eq!(store.read(&names[0]).await.unwrap(), "percent");
    assert_eq!(store.read(&names[1]).await.unwrap(), "bracketed");
}

#[tokio::test]
async fn given_local_store_and_bracketed_name_when_listing_then_name_is_not_encoded() {
    let (dir, store) = create_local_store();
    store
        .upload(&document("notes[1].txt", "on disk"))
        .await
        .unwrap();

    let names = store.list().await.unwrap();

    assert_eq!(names, vec![name("notes[1].txt")]);
    assert_eq!(store.read(&names[0]).await.unwrap(), "on disk");
    assert!(dir.path().join("docs").join("notes[1].txt").exists());
}
