//! Pure Apify REST API client.
//!
//! A minimal client for reading the output of pre-configured Apify actor
//! tasks. Scraping happens on Apify's schedule; this client only fetches the
//! dataset of the last successful run.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::{ApifyClient, InstagramPost};
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let posts: Vec<InstagramPost> = client.last_task_run_items("my-task-id").await?;
//! for post in &posts {
//!     println!("{}", post.caption_text().unwrap_or("(no caption)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{InstagramPost, ItemId, PostTimestamp};

use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://api.apify.com/v2";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self::with_http_client(reqwest::Client::new(), token)
    }

    /// Reuse an existing connection pool.
    pub fn with_http_client(client: reqwest::Client, token: String) -> Self {
        Self {
            client,
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch dataset items from the last successful run of an actor task.
    ///
    /// The item type is left to the caller: task output varies with the
    /// scraper configured behind the task, so callers that need to inspect
    /// the shape can ask for `serde_json::Value`.
    pub async fn last_task_run_items<T: DeserializeOwned>(&self, task_id: &str) -> Result<T> {
        let url = format!(
            "{}/actor-tasks/{}/runs/last/dataset/items",
            self.base_url, task_id
        );

        tracing::debug!(task_id, "Fetching last successful task run dataset");

        let resp = self
            .client
            .get(&url)
            .query(&[("status", "SUCCEEDED")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: T = resp.json().await?;
        Ok(items)
    }
}
