use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    provider: &'static str,
    showcase: ShowcaseHealth,
}

#[derive(Serialize)]
pub struct ShowcaseHealth {
    instagram_posts: usize,
    reddit_posts: usize,
}

/// Health check endpoint
///
/// Reports the active provider and the size of the loaded dataset. Makes no
/// outbound calls, so it stays healthy while the provider is down.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        provider: state.provider.name(),
        showcase: ShowcaseHealth {
            instagram_posts: state.dataset.instagram.len(),
            reddit_posts: state.dataset.reddit.len(),
        },
    })
}
