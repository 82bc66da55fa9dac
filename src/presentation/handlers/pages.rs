use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;

use crate::presentation::config::{LanguageOption, Page};
use crate::presentation::state::AppState;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

#[derive(Serialize)]
pub struct PageEntry {
    pub id: Page,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageEntry>,
    pub default_page: Page,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn pages_handler(State(state): State<AppState>) -> Json<PagesResponse> {
    let pages = state
        .ui
        .pages()
        .into_iter()
        .map(|id| PageEntry {
            id,
            title: id.title(),
        })
        .collect();

    Json(PagesResponse {
        pages,
        default_page: state.ui.effective_default_page(),
    })
}

pub async fn languages_handler(State(state): State<AppState>) -> Json<Vec<LanguageOption>> {
    Json(state.ui.language_options())
}
