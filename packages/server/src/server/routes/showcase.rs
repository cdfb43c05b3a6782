use axum::{
    extract::{Extension, Query},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::domains::showcase::{render_page, Dataset, ShowcaseView};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ShowcaseQuery {
    pub country: Option<String>,
}

/// `GET /?country=<name>` renders the selector page from the bundled dataset.
pub async fn showcase_page(
    Extension(state): Extension<AppState>,
    Query(query): Query<ShowcaseQuery>,
) -> Html<String> {
    let view = ShowcaseView::select(&state.dataset, query.country.as_deref());
    Html(render_page(&view))
}

/// `GET /data/posts.json`
pub async fn dataset_handler(Extension(state): Extension<AppState>) -> Json<Dataset> {
    Json(state.dataset.as_ref().clone())
}
