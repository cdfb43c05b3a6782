//! Known provider payload layouts and their strict decoders.
//!
//! Detection looks only at where the post collection lives. Each layout then
//! has exactly one record type, so a record that does not fit its layout is a
//! decode error rather than a silently half-filled post.

use apify_client::{InstagramPost, ItemId, PostTimestamp};
use rapidapi_client::types::{Edge, GraphNode, MediaId, MediaItem};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::normalize::PostKey;

/// Epoch values at or above this are milliseconds, not seconds.
const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;

/// A post collection located inside a provider payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadShape<'a> {
    /// Top-level array of Apify dataset items
    FlatArray(&'a [Value]),
    /// `data.items[]` hashtag-search media items
    DataItems(&'a [Value]),
    /// `items[]` hashtag-search media items
    Items(&'a [Value]),
    /// `data.edges[].node` graph nodes
    DataEdges(&'a [Value]),
    /// `edge_hashtag_to_media.edges[].node` graph nodes
    HashtagEdges(&'a [Value]),
}

impl<'a> PayloadShape<'a> {
    /// Find the first known layout, in fixed priority order.
    pub fn detect(payload: &'a Value) -> Option<Self> {
        if let Some(entries) = payload.as_array() {
            return Some(Self::FlatArray(entries.as_slice()));
        }

        let array_at = |pointer: &str| -> Option<&'a [Value]> {
            payload
                .pointer(pointer)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
        };

        array_at("/data/items")
            .map(Self::DataItems)
            .or_else(|| array_at("/items").map(Self::Items))
            .or_else(|| array_at("/data/edges").map(Self::DataEdges))
            .or_else(|| array_at("/edge_hashtag_to_media/edges").map(Self::HashtagEdges))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FlatArray(_) => "flat_array",
            Self::DataItems(_) => "data.items",
            Self::Items(_) => "items",
            Self::DataEdges(_) => "data.edges",
            Self::HashtagEdges(_) => "edge_hashtag_to_media.edges",
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> &'a [Value] {
        match *self {
            Self::FlatArray(entries)
            | Self::DataItems(entries)
            | Self::Items(entries)
            | Self::DataEdges(entries)
            | Self::HashtagEdges(entries) => entries,
        }
    }

    /// Decode the first `limit` entries with this layout's record type.
    ///
    /// Fails as a whole if any of those entries does not fit.
    pub fn decode(&self, limit: usize) -> Result<Vec<SourcePost>, serde_json::Error> {
        match *self {
            Self::FlatArray(entries) => decode_each::<InstagramPost>(entries, limit),
            Self::DataItems(entries) | Self::Items(entries) => {
                decode_each::<MediaItem>(entries, limit)
            }
            Self::DataEdges(entries) | Self::HashtagEdges(entries) => {
                decode_each::<Edge<GraphNode>>(entries, limit)
            }
        }
    }
}

fn decode_each<T>(entries: &[Value], limit: usize) -> Result<Vec<SourcePost>, serde_json::Error>
where
    T: DeserializeOwned + Into<SourcePost>,
{
    entries
        .iter()
        .take(limit)
        .map(|entry| T::deserialize(entry).map(Into::into))
        .collect()
}

/// Provider-neutral view of one record, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcePost {
    pub id: Option<PostKey>,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub username: Option<String>,
    pub likes: Option<i64>,
    /// Unix seconds
    pub timestamp: Option<i64>,
}

impl From<InstagramPost> for SourcePost {
    fn from(post: InstagramPost) -> Self {
        let caption = owned(post.caption_text());
        let timestamp = post.timestamp.as_ref().and_then(|ts| match ts {
            PostTimestamp::Iso(at) => Some(at.timestamp()),
            PostTimestamp::Epoch(value) => Some(epoch_seconds(*value)),
            PostTimestamp::Unknown(_) => None,
        });
        let image = non_empty(post.display_url.clone()).or_else(|| owned(post.first_image()));

        Self {
            id: first_key(post.id.map(PostKey::from), post.short_code),
            image,
            caption,
            username: non_empty(post.owner_username),
            likes: post.likes_count,
            timestamp,
        }
    }
}

impl From<MediaItem> for SourcePost {
    fn from(item: MediaItem) -> Self {
        Self {
            image: owned(item.image_url()),
            caption: owned(item.caption_text()),
            username: owned(item.username()),
            likes: item.like_count(),
            timestamp: item.taken_at.map(epoch_seconds),
            id: first_key(item.id.map(PostKey::from), item.code),
        }
    }
}

impl From<Edge<GraphNode>> for SourcePost {
    fn from(edge: Edge<GraphNode>) -> Self {
        let node = edge.node;
        Self {
            image: owned(node.image_url()),
            caption: owned(node.caption_text()),
            username: owned(node.username()),
            likes: node.like_count(),
            timestamp: node.taken_at_timestamp.map(epoch_seconds),
            id: first_key(node.id.map(PostKey::from), node.shortcode),
        }
    }
}

impl From<ItemId> for PostKey {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Text(s) => PostKey::Text(s),
            ItemId::Number(n) => PostKey::Number(n),
        }
    }
}

impl From<MediaId> for PostKey {
    fn from(id: MediaId) -> Self {
        match id {
            MediaId::Text(s) => PostKey::Text(s),
            MediaId::Number(n) => PostKey::Number(n),
        }
    }
}

fn first_key(id: Option<PostKey>, short_code: Option<String>) -> Option<PostKey> {
    id.filter(|key| !matches!(key, PostKey::Text(s) if s.is_empty()))
        .or_else(|| non_empty(short_code).map(PostKey::Text))
}

fn owned(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn epoch_seconds(value: f64) -> i64 {
    if value.abs() >= EPOCH_MILLIS_THRESHOLD {
        (value / 1000.0) as i64
    } else {
        value as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detection_priority() {
        let flat = json!([{"id": "1"}]);
        assert!(matches!(PayloadShape::detect(&flat), Some(PayloadShape::FlatArray(_))));

        // data.items wins over a sibling items array
        let both = json!({"data": {"items": [], "edges": []}, "items": [{}]});
        assert!(matches!(PayloadShape::detect(&both), Some(PayloadShape::DataItems(_))));

        let items = json!({"items": [{}]});
        assert_eq!(PayloadShape::detect(&items).map(|s| s.name()), Some("items"));

        let edges = json!({"data": {"edges": [{"node": {}}]}});
        assert_eq!(PayloadShape::detect(&edges).map(|s| s.name()), Some("data.edges"));

        let hashtag = json!({"edge_hashtag_to_media": {"edges": []}});
        assert_eq!(
            PayloadShape::detect(&hashtag).map(|s| s.name()),
            Some("edge_hashtag_to_media.edges")
        );
    }

    #[test]
    fn test_unrecognized_payloads_have_no_shape() {
        for payload in [
            json!({}),
            json!(null),
            json!("posts"),
            json!({"data": {"items": "not-an-array"}}),
            json!({"results": [{"id": 1}]}),
        ] {
            assert_eq!(PayloadShape::detect(&payload), None, "payload: {payload}");
        }
    }

    #[test]
    fn test_decode_respects_limit_before_decoding() {
        // The malformed third entry is past the limit and never decoded
        let payload = json!([{"id": "a"}, {"id": "b"}, {"id": {"nested": true}}]);
        let shape = PayloadShape::detect(&payload).unwrap();

        assert_eq!(shape.len(), 3);
        assert_eq!(shape.decode(2).unwrap().len(), 2);
        assert!(shape.decode(3).is_err());
    }

    #[test]
    fn test_apify_item_resolution() {
        let payload = json!([{
            "shortCode": "Cabc",
            "displayUrl": "",
            "images": ["https://img/first.jpg", "https://img/second.jpg"],
            "caption": "Fuji at dawn",
            "ownerUsername": "hiker",
            "likesCount": 321,
            "timestamp": "2024-05-01T10:00:00.000Z"
        }]);
        let posts = PayloadShape::detect(&payload).unwrap().decode(9).unwrap();

        assert_eq!(
            posts[0],
            SourcePost {
                id: Some(PostKey::Text("Cabc".into())),
                image: Some("https://img/first.jpg".into()),
                caption: Some("Fuji at dawn".into()),
                username: Some("hiker".into()),
                likes: Some(321),
                timestamp: Some(1_714_557_600),
            }
        );
    }

    #[test]
    fn test_media_item_resolution() {
        let payload = json!({"data": {"items": [{
            "id": 3_300_000_001_i64,
            "image_versions2": {"candidates": [{"url": "https://img/hd.jpg", "width": 1080}]},
            "thumbnail_url": "https://img/thumb.jpg",
            "caption": {"text": "Pad thai"},
            "user": {"username": "foodie"},
            "like_count": 88,
            "taken_at": 1_714_557_600
        }]}});
        let posts = PayloadShape::detect(&payload).unwrap().decode(9).unwrap();

        assert_eq!(posts[0].id, Some(PostKey::Number(3_300_000_001)));
        assert_eq!(posts[0].image.as_deref(), Some("https://img/hd.jpg"));
        assert_eq!(posts[0].caption.as_deref(), Some("Pad thai"));
        assert_eq!(posts[0].username.as_deref(), Some("foodie"));
        assert_eq!(posts[0].likes, Some(88));
        assert_eq!(posts[0].timestamp, Some(1_714_557_600));
    }

    #[test]
    fn test_graph_node_resolution_with_millisecond_epoch() {
        let payload = json!({"edge_hashtag_to_media": {"edges": [{"node": {
            "id": "",
            "shortcode": "Bxyz",
            "display_url": "https://img/node.jpg",
            "owner": {"username": "roamer"},
            "edge_media_preview_like": {"count": 5},
            "taken_at_timestamp": 1_714_557_600_000_i64
        }}]}});
        let posts = PayloadShape::detect(&payload).unwrap().decode(9).unwrap();

        assert_eq!(posts[0].id, Some(PostKey::Text("Bxyz".into())));
        assert_eq!(posts[0].caption, None);
        assert_eq!(posts[0].likes, Some(5));
        assert_eq!(posts[0].timestamp, Some(1_714_557_600));
    }

    #[test]
    fn test_edge_without_node_fails_decode() {
        let payload = json!({"data": {"edges": [{"cursor": "x"}]}});
        assert!(PayloadShape::detect(&payload).unwrap().decode(9).is_err());
    }
}
