use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{BlobName, UploadedDocument};
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub uploaded: Vec<UploadedFile>,
}

#[derive(Serialize)]
pub struct DocumentListResponse {
    pub container: String,
    pub files: Vec<String>,
}

/// Accepts any number of `.txt` files. A form holding any other file type is
/// rejected before anything is written. Files are then stored in form order;
/// if storage fails part way, the error names the files already written.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_documents_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let name = BlobName::new(file_name).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if !name.is_text_file() {
            tracing::warn!(name = %name, "Rejected non-text upload");
            return Err(ApiError::UnsupportedMediaType(format!(
                "Only .txt files are accepted: {}",
                name
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        documents.push(UploadedDocument::new(name, data));
    }

    if documents.is_empty() {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    }

    let container = state.document_service.container().to_string();
    let mut uploaded: Vec<UploadedFile> = Vec::with_capacity(documents.len());
    for document in &documents {
        let name = match state.document_service.upload(document).await {
            Ok(name) => name,
            Err(e) if uploaded.is_empty() => return Err(e.into()),
            Err(e) => {
                let written: Vec<&str> = uploaded.iter().map(|f| f.name.as_str()).collect();
                tracing::warn!(written = ?written, "Upload stopped part way through the form");
                return Err(ApiError::from(e)
                    .with_context(format!("already uploaded: {}", written.join(", "))));
            }
        };
        uploaded.push(UploadedFile {
            message: format!("File '{}' uploaded to '{}/{}'", name, container, name),
            name: name.to_string(),
        });
    }

    Ok((StatusCode::CREATED, Json(UploadResponse { uploaded })))
}

pub async fn list_documents_handler(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let files = state
        .document_service
        .list()
        .await
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    Json(DocumentListResponse {
        container: state.document_service.container().to_string(),
        files,
    })
}
