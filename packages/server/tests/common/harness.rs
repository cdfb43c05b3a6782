#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::ORIGIN, HeaderMap, Request, StatusCode},
    Router,
};
use server_core::config::{ApifySettings, Config, ProviderSettings, RapidApiSettings};
use server_core::domains::showcase::Dataset;
use server_core::server::build_app;
use server_core::server::static_files::load_dataset;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

fn config(provider: ProviderSettings) -> Config {
    Config {
        port: 0,
        provider,
        keep_imageless: false,
        showcase_data_path: None,
    }
}

pub fn apify_config(base_url: &str, task_id: Option<&str>, token: Option<&str>) -> Config {
    config(ProviderSettings::Apify(ApifySettings {
        country: "Japan".into(),
        task_env_var: "APIFY_TASK_JAPAN".into(),
        task_id: task_id.map(String::from),
        token: token.map(String::from),
        base_url: base_url.into(),
    }))
}

pub fn rapidapi_config(base_url: &str, api_key: Option<&str>) -> Config {
    config(ProviderSettings::RapidApi(RapidApiSettings {
        api_key: api_key.map(String::from),
        host: "instagram.test".into(),
        base_url: base_url.into(),
    }))
}

pub fn app(config: &Config) -> Router {
    let dataset = load_dataset(None).expect("embedded dataset loads");
    build_app(config, dataset)
}

pub fn app_with_dataset(config: &Config, dataset: Dataset) -> Router {
    build_app(config, dataset)
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .header(ORIGIN, "https://travel.example")
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}
