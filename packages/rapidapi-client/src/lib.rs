//! Pure RapidAPI client for Instagram hashtag search.
//!
//! RapidAPI fronts third-party scrapers behind a key + host header pair.
//! This client issues the search and hands back the raw JSON body: the
//! listing layout differs between scraper builds, so decoding is left to the
//! caller (see [`types`] for the record layouts).
//!
//! # Example
//!
//! ```rust,ignore
//! use rapidapi_client::RapidApiClient;
//!
//! let client = RapidApiClient::new("your-key".into(), "instagram-scraper-api2.p.rapidapi.com".into());
//! let body = client.search_hashtag("japantravel").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{RapidApiError, Result};
pub use types::{GraphNode, MediaId, MediaItem};

pub const DEFAULT_HOST: &str = "instagram-scraper-api2.p.rapidapi.com";

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

pub struct RapidApiClient {
    client: reqwest::Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl RapidApiClient {
    pub fn new(api_key: String, host: String) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, host)
    }

    /// Reuse an existing connection pool.
    pub fn with_http_client(client: reqwest::Client, api_key: String, host: String) -> Self {
        let base_url = format!("https://{}", host);
        Self {
            client,
            api_key,
            host,
            base_url,
        }
    }

    /// Override the request origin. The `X-RapidAPI-Host` header keeps the
    /// configured host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Search recent media for a hashtag (without the leading `#`).
    pub async fn search_hashtag(&self, hashtag: &str) -> Result<serde_json::Value> {
        let url = format!("{}/v1/hashtag", self.base_url);

        tracing::debug!(hashtag, host = %self.host, "Searching hashtag via RapidAPI");

        let resp = self
            .client
            .get(&url)
            .query(&[("hashtag", hashtag)])
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.host)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RapidApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}
