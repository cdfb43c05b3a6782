//! Provider payload -> fixed-shape posts.

use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::relative_time::relative_time;
use super::shapes::{PayloadShape, SourcePost};

/// Hard cap on posts per response.
pub const MAX_POSTS: usize = 9;
pub const CAPTION_MAX_CHARS: usize = 200;

const CAPTION_PLACEHOLDER: &str = "Travel moment";
const USERNAME_PLACEHOLDER: &str = "traveler";
const FABRICATED_LIKES: Range<u64> = 500..5500;

/// Post identifier: the provider's own id, or the position in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostKey {
    Number(i64),
    Text(String),
}

/// The one record shape the front end understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPost {
    pub id: PostKey,
    pub country: String,
    pub image: String,
    pub caption: String,
    pub username: String,
    pub likes: u64,
    pub date: String,
}

/// What to do when a record carries no like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingLikes {
    Zero,
    /// Placeholder count in `[500, 5500)` so cards never show zero
    Fabricate,
}

impl MissingLikes {
    fn resolve(self) -> u64 {
        match self {
            MissingLikes::Zero => 0,
            MissingLikes::Fabricate => fastrand::u64(FABRICATED_LIKES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizePolicy {
    /// Drop records without an image
    pub require_image: bool,
    pub missing_likes: MissingLikes,
}

impl Default for NormalizePolicy {
    fn default() -> Self {
        Self {
            require_image: true,
            missing_likes: MissingLikes::Zero,
        }
    }
}

/// Normalize a provider payload into at most [`MAX_POSTS`] posts.
///
/// Never fails. An unrecognized payload yields an empty list, and so does a
/// payload where any of the first [`MAX_POSTS`] records does not decode:
/// degradation is all-or-nothing so the page shows an empty feed rather
/// than a partial one.
pub fn normalize(
    payload: &serde_json::Value,
    country: &str,
    policy: &NormalizePolicy,
    now: DateTime<Utc>,
) -> Vec<NormalizedPost> {
    let Some(shape) = PayloadShape::detect(payload) else {
        debug!(country, "No known post collection in provider payload");
        return Vec::new();
    };

    let sources = match shape.decode(MAX_POSTS) {
        Ok(sources) => sources,
        Err(e) => {
            warn!(
                country,
                shape = shape.name(),
                error = %e,
                "Failed to decode provider posts, returning none"
            );
            return Vec::new();
        }
    };

    let posts: Vec<NormalizedPost> = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| resolve(source, index, country, policy, now))
        .filter(|post| !policy.require_image || !post.image.is_empty())
        .collect();

    debug!(
        country,
        shape = shape.name(),
        available = shape.len(),
        kept = posts.len(),
        "Normalized provider posts"
    );

    posts
}

fn resolve(
    source: SourcePost,
    index: usize,
    country: &str,
    policy: &NormalizePolicy,
    now: DateTime<Utc>,
) -> NormalizedPost {
    let likes = match source.likes {
        Some(count) => count.max(0) as u64,
        None => policy.missing_likes.resolve(),
    };

    NormalizedPost {
        id: source.id.unwrap_or(PostKey::Number(index as i64)),
        country: country.to_string(),
        image: source.image.unwrap_or_default(),
        caption: source
            .caption
            .map(|c| c.chars().take(CAPTION_MAX_CHARS).collect())
            .unwrap_or_else(|| CAPTION_PLACEHOLDER.to_string()),
        username: source
            .username
            .unwrap_or_else(|| USERNAME_PLACEHOLDER.to_string()),
        likes,
        date: relative_time(source.timestamp, now),
    }
}
