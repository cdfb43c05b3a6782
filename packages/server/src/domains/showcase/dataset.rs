use serde::{Deserialize, Serialize};

use crate::domains::instagram::{NormalizedPost, PostKey};

/// Demo content bundled with the site (`data/posts.json`).
///
/// Loaded once at startup and passed by reference into every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub instagram: Vec<NormalizedPost>,
    #[serde(default)]
    pub reddit: Vec<DiscussionPost>,
}

/// A forum-style discussion post. Only ever comes from the static dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPost {
    pub id: PostKey,
    pub country: String,
    pub title: String,
    pub subreddit: String,
    pub author: String,
    pub upvotes: u64,
    pub comments: u64,
    pub date: String,
}

/// Posts of both kinds for one country, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryPosts<'a> {
    pub instagram: Vec<&'a NormalizedPost>,
    pub reddit: Vec<&'a DiscussionPost>,
}

impl CountryPosts<'_> {
    pub fn is_empty(&self) -> bool {
        self.instagram.is_empty() && self.reddit.is_empty()
    }
}

impl Dataset {
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Exact-match filter on the country label.
    pub fn for_country(&self, country: &str) -> CountryPosts<'_> {
        CountryPosts {
            instagram: self
                .instagram
                .iter()
                .filter(|p| p.country == country)
                .collect(),
            reddit: self.reddit.iter().filter(|p| p.country == country).collect(),
        }
    }
}
