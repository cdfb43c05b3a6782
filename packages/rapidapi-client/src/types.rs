//! Media records returned by the Instagram hashtag-search APIs on RapidAPI.
//!
//! Two record layouts show up in practice: the private-API "media item"
//! (`data.items[]`, `items[]`) and the public GraphQL "edge node"
//! (`data.edges[].node`, `edge_hashtag_to_media.edges[].node`).

use serde::Deserialize;

/// Identifier as sent by the API: string ids or numeric primary keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MediaId {
    Text(String),
    Number(i64),
}

/// A media item from the private-API layout.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub id: Option<MediaId>,
    pub code: Option<String>,
    pub image_versions2: Option<ImageVersions>,
    pub thumbnail_url: Option<String>,
    pub display_url: Option<String>,
    pub carousel_media: Option<Vec<CarouselMedia>>,
    pub caption: Option<Caption>,
    pub user: Option<Account>,
    pub owner: Option<Account>,
    pub like_count: Option<i64>,
    pub likes: Option<i64>,
    pub taken_at: Option<f64>,
}

impl MediaItem {
    /// First image candidate, falling through the known image fields.
    pub fn image_url(&self) -> Option<&str> {
        self.image_versions2
            .as_ref()
            .and_then(ImageVersions::first_url)
            .or(self.thumbnail_url.as_deref())
            .or(self.display_url.as_deref())
            .or_else(|| {
                self.carousel_media
                    .as_ref()
                    .and_then(|c| c.first())
                    .and_then(|c| c.image_versions2.as_ref())
                    .and_then(ImageVersions::first_url)
            })
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_ref().and_then(Caption::text)
    }

    pub fn username(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .or_else(|| self.owner.as_ref().and_then(|o| o.username.as_deref()))
    }

    pub fn like_count(&self) -> Option<i64> {
        self.like_count.or(self.likes)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageVersions {
    pub candidates: Option<Vec<ImageCandidate>>,
}

impl ImageVersions {
    fn first_url(&self) -> Option<&str> {
        self.candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.url.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageCandidate {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselMedia {
    pub image_versions2: Option<ImageVersions>,
}

/// Captions arrive either as an object with `text` or as a bare string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Caption {
    Plain(String),
    Object { text: Option<String> },
    Other(serde_json::Value),
}

impl Caption {
    pub fn text(&self) -> Option<&str> {
        match self {
            Caption::Plain(s) => Some(s),
            Caption::Object { text } => text.as_deref(),
            Caption::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub username: Option<String>,
}

/// A media node from the GraphQL edge layout.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphNode {
    pub id: Option<MediaId>,
    pub shortcode: Option<String>,
    pub display_url: Option<String>,
    pub thumbnail_src: Option<String>,
    pub edge_media_to_caption: Option<Edges<CaptionNode>>,
    pub owner: Option<Account>,
    pub edge_liked_by: Option<Count>,
    pub edge_media_preview_like: Option<Count>,
    pub taken_at_timestamp: Option<f64>,
}

impl GraphNode {
    pub fn image_url(&self) -> Option<&str> {
        self.display_url
            .as_deref()
            .or(self.thumbnail_src.as_deref())
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.edge_media_to_caption
            .as_ref()
            .and_then(|e| e.edges.as_ref())
            .and_then(|e| e.first())
            .and_then(|e| e.node.text.as_deref())
    }

    pub fn username(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.username.as_deref())
    }

    pub fn like_count(&self) -> Option<i64> {
        self.edge_liked_by
            .as_ref()
            .and_then(|c| c.count)
            .or_else(|| self.edge_media_preview_like.as_ref().and_then(|c| c.count))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edges<T> {
    pub edges: Option<Vec<Edge<T>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionNode {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Count {
    pub count: Option<i64>,
}
