//! Static showcase: demo posts from a bundled dataset, rendered as cards.

pub mod dataset;
pub mod format;
pub mod render;

pub use dataset::{CountryPosts, Dataset, DiscussionPost};
pub use format::format_number;
pub use render::{render_page, ShowcaseView};
