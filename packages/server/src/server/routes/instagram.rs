use axum::{
    extract::{Extension, Query},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::ApiError;
use crate::domains::instagram::{dispatch, fetch_payload, normalize, NormalizedPost};
use crate::server::app::AppState;

pub const NO_POSTS_DEBUG: &str = "No posts found in API response";

#[derive(Debug, Deserialize)]
pub struct InstagramQuery {
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<NormalizedPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<&'static str>,
}

/// `GET /api/instagram?country=<name>`
///
/// One outbound provider call per request. Configuration problems answer
/// before any call is made.
pub async fn instagram_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<InstagramQuery>,
) -> Result<Json<PostsResponse>, ApiError> {
    let request = dispatch(&state.provider, query.country.as_deref()).map_err(|e| {
        warn!(error = %e, country = ?query.country, "Rejected Instagram request");
        e
    })?;

    let payload = fetch_payload(&state.http, &request).await?;
    let policy = request.normalize_policy(state.keep_imageless);
    let posts = normalize(&payload, request.country_label(), &policy, Utc::now());

    if posts.is_empty() {
        info!(provider = request.provider_name(), "Provider returned no usable posts");
        return Ok(Json(PostsResponse {
            posts,
            debug: Some(NO_POSTS_DEBUG),
        }));
    }

    info!(
        provider = request.provider_name(),
        country = request.country_label(),
        count = posts.len(),
        "Returning Instagram posts"
    );

    Ok(Json(PostsResponse { posts, debug: None }))
}
