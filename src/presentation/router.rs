use axum::Router;
use axum::http::HeaderName;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{REQUEST_ID_HEADER, request_context_middleware};
use crate::presentation::handlers::{
    chat_handler, costing_generate_handler, costing_prompt_handler, health_handler,
    index_handler, languages_handler, list_documents_handler, load_prompt_handler, pages_handler,
    session_cost_handler, translate_handler, upload_documents_handler,
};
use crate::presentation::session::{SESSION_ID_HEADER, session_middleware};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            HeaderName::from_static(SESSION_ID_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/pages", get(pages_handler))
        .route("/api/v1/languages", get(languages_handler))
        .route(
            "/api/v1/documents",
            get(list_documents_handler).post(upload_documents_handler),
        )
        .route("/api/v1/chat", post(chat_handler))
        .route("/api/v1/chat/translate", post(translate_handler))
        .route("/api/v1/session/cost", get(session_cost_handler));

    if state.ui.costing_page {
        router = router
            .route("/api/v1/costing/prompt", get(costing_prompt_handler))
            .route("/api/v1/costing/prompt/load", post(load_prompt_handler))
            .route("/api/v1/costing/generate", post(costing_generate_handler));
    }

    router
        .layer(middleware::from_fn(session_middleware))
        .layer(middleware::from_fn(request_context_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
