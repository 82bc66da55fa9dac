use std::sync::Arc;

use docprompt::application::ports::StorageError;
use docprompt::application::services::{DocumentError, DocumentService};
use docprompt::infrastructure::storage::ObjectBlobStore;

use crate::helpers::{TEST_CONTAINER, UnreachableBlobStore, document, name};

fn in_memory_service() -> DocumentService {
    DocumentService::new(Arc::new(ObjectBlobStore::in_memory(TEST_CONTAINER)))
}

#[tokio::test]
async fn given_uploaded_documents_when_listing_and_reading_then_corpus_matches_join() {
    let service = in_memory_service();
    service.upload(&document("a.txt", "alpha")).await.unwrap();
    service.upload(&document("b.txt", "beta")).await.unwrap();
    service.upload(&document("c.txt", "gamma")).await.unwrap();

    let names = service.list().await;
    let mut texts = Vec::new();
    for n in &names {
        texts.push(service.read(n).await.unwrap());
    }

    let corpus = service.corpus().await.unwrap();
    assert_eq!(corpus.as_str(), texts.join("\n"));
    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn given_existing_blob_when_reuploading_same_name_then_content_is_replaced() {
    let service = in_memory_service();
    service.upload(&document("notes.txt", "old")).await.unwrap();
    service.upload(&document("notes.txt", "new")).await.unwrap();

    assert_eq!(service.read(&name("notes.txt")).await.unwrap(), "new");
    assert_eq!(service.list().await.len(), 1);
}

#[tokio::test]
async fn given_non_text_file_when_uploading_then_rejected_before_storage() {
    let service = in_memory_service();

    let result = service.upload(&document("image.png", "bytes")).await;

    assert!(matches!(result, Err(DocumentError::UnsupportedFileType(_))));
    assert!(service.list().await.is_empty());
}

#[tokio::test]
async fn given_unreachable_backend_when_listing_then_returns_empty() {
    let service = DocumentService::new(Arc::new(UnreachableBlobStore));

    assert!(service.list().await.is_empty());
}

#[tokio::test]
async fn given_unreachable_backend_when_uploading_then_error_propagates() {
    let service = DocumentService::new(Arc::new(UnreachableBlobStore));

    let result = service.upload(&document("a.txt", "alpha")).await;

    assert!(matches!(
        result,
        Err(DocumentError::Storage(StorageError::UploadFailed { .. }))
    ));
}

#[tokio::test]
async fn given_unreachable_backend_when_building_corpus_then_corpus_is_empty() {
    let service = DocumentService::new(Arc::new(UnreachableBlobStore));

    let corpus = service.corpus().await.unwrap();

    assert!(corpus.is_empty());
}

#[tokio::test]
async fn given_missing_blob_when_reading_then_returns_not_found() {
    let service = in_memory_service();

    let result = service.read(&name("ghost.txt")).await;

    assert!(matches!(
        result,
        Err(DocumentError::Storage(StorageError::NotFound(_)))
    ));
}

#[tokio::test]
async fn given_bracketed_file_name_when_building_corpus_then_document_is_included() {
    let service = in_memory_service();
    service
        .upload(&document("notes[1].txt", "Doc A content"))
        .await
        .unwrap();

    let corpus = service.corpus().await.unwrap();

    assert_eq!(service.list().await, vec![name("notes[1].txt")]);
    assert_eq!(corpus.as_str(), "Doc A content");
}
