use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{CompletionError, StorageError};
use crate::application::services::{ChatError, CostingError, DocumentError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub retryable: bool,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnsupportedMediaType(String),
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    Upstream {
        status: StatusCode,
        message: String,
        retryable: bool,
    },
    Internal(String),
}

impl ApiError {
    /// Appends detail to the message shown to the caller.
    pub fn with_context(self, detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref();
        match self {
            ApiError::BadRequest(m) => ApiError::BadRequest(format!("{m}; {detail}")),
            ApiError::UnsupportedMediaType(m) => {
                ApiError::UnsupportedMediaType(format!("{m}; {detail}"))
            }
            ApiError::NotFound(m) => ApiError::NotFound(format!("{m}; {detail}")),
            ApiError::Conflict(m) => ApiError::Conflict(format!("{m}; {detail}")),
            ApiError::Unprocessable(m) => ApiError::Unprocessable(format!("{m}; {detail}")),
            ApiError::Upstream {
                status,
                message,
                retryable,
            } => ApiError::Upstream {
                status,
                message: format!("{message}; {detail}"),
                retryable,
            },
            ApiError::Internal(m) => ApiError::Internal(format!("{m}; {detail}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, retryable) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m, false),
            ApiError::UnsupportedMediaType(m) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, m, false),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m, false),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, m, false),
            ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m, false),
            ApiError::Upstream {
                status,
                message,
                retryable,
            } => (status, message, retryable),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m, false),
        };

        (status, Json(ErrorResponse { error, retryable })).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        tracing::error!(error = %e, "Storage operation failed");
        match e {
            StorageError::InvalidName(_) => ApiError::BadRequest(e.to_string()),
            StorageError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StorageError::InvalidUtf8(_) => ApiError::Unprocessable(e.to_string()),
            StorageError::Configuration(_) => ApiError::Internal(e.to_string()),
            StorageError::UploadFailed { .. }
            | StorageError::ListFailed(_)
            | StorageError::DownloadFailed(_) => ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                retryable: e.is_retryable(),
                message: e.to_string(),
            },
        }
    }
}

impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        tracing::error!(error = %e, "Completion failed");
        let status = match e {
            CompletionError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            CompletionError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        ApiError::Upstream {
            status,
            retryable: e.is_retryable(),
            message: format!("Completion failed: {}", e),
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::UnsupportedFileType(_) => ApiError::UnsupportedMediaType(e.to_string()),
            DocumentError::Storage(inner) => inner.into(),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Documents(inner) => inner.into(),
            ChatError::Completion(inner) => inner.into(),
            ChatError::Session(inner) => ApiError::Internal(inner.to_string()),
            ChatError::NothingToTranslate | ChatError::NoResponseYet => {
                ApiError::Conflict(e.to_string())
            }
        }
    }
}

impl From<CostingError> for ApiError {
    fn from(e: CostingError) -> Self {
        match e {
            CostingError::Documents(inner) => inner.into(),
            CostingError::Completion(inner) => inner.into(),
            CostingError::Session(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}
