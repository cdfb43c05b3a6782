use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single Instagram post from a scraper task dataset.
///
/// Every field is optional: tasks are configured by hand in the Apify console
/// and their output drifts between scraper versions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPost {
    pub id: Option<ItemId>,
    pub short_code: Option<String>,
    /// Usually a string, but some scrapers emit `null` or an object.
    pub caption: Option<serde_json::Value>,
    pub owner_username: Option<String>,
    pub display_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub likes_count: Option<i64>,
    pub timestamp: Option<PostTimestamp>,
}

impl InstagramPost {
    /// Caption text, if the scraper emitted it as a string.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_ref().and_then(|c| c.as_str())
    }

    pub fn first_image(&self) -> Option<&str> {
        self.images.as_ref().and_then(|i| i.first()).map(String::as_str)
    }
}

/// Dataset item identifier; older scraper builds emit numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(i64),
}

/// Post timestamp as ISO-8601 or as a raw epoch number.
///
/// Empty strings and anything else unparseable land in `Unknown`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PostTimestamp {
    Iso(DateTime<Utc>),
    Epoch(f64),
    Unknown(serde_json::Value),
}
