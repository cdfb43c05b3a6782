//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ProviderSettings};
use crate::domains::showcase::Dataset;
use crate::server::routes::{dataset_handler, health_handler, instagram_handler, showcase_page};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ProviderSettings>,
    pub keep_imageless: bool,
    pub http: reqwest::Client,
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(config: &Config, dataset: Dataset) -> Self {
        Self {
            provider: Arc::new(config.provider.clone()),
            keep_imageless: config.keep_imageless,
            http: reqwest::Client::new(),
            dataset: Arc::new(dataset),
        }
    }
}

/// Build the Axum application router
pub fn build_app(config: &Config, dataset: Dataset) -> Router {
    let app_state = AppState::new(config, dataset);

    // Browsers on any origin may read the feed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(showcase_page))
        .route("/data/posts.json", get(dataset_handler))
        .route("/api/instagram", get(instagram_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        // CorsLayer only advertises methods on preflight
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
