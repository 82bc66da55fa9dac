use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::SessionId;
use crate::presentation::handlers::ApiError;

pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Resolves the caller's session from `x-session-id`, minting a fresh one
/// when the header is absent, and echoes it on the response.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let session_id = match request.headers().get(SESSION_ID_HEADER) {
        None => {
            let id = SessionId::new();
            tracing::debug!(session = %id, "Started new session");
            id
        }
        Some(value) => match value.to_str().ok().and_then(|v| v.parse().ok()) {
            Some(id) => id,
            None => {
                tracing::warn!("Rejected malformed session header");
                return ApiError::BadRequest(format!("invalid {} header", SESSION_ID_HEADER))
                    .into_response();
            }
        },
    };

    request.extensions_mut().insert(session_id);

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&session_id.to_string()) {
        response
            .headers_mut()
            .insert(SESSION_ID_HEADER, header_value);
    }

    response
}
