use bytes::Bytes;

use super::blob_name::BlobName;

/// A document as received from the upload form. Persisting it under an
/// existing name replaces the stored content.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub name: BlobName,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(name: BlobName, content: impl Into<Bytes>) -> Self {
        Self {
            name,
            content: content.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}
