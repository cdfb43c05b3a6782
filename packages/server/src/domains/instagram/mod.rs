//! Instagram feed: pick a provider, fetch once, normalize into fixed-shape posts.

pub mod country;
pub mod dispatcher;
pub mod normalize;
pub mod relative_time;
pub mod shapes;

pub use country::Country;
pub use dispatcher::{dispatch, fetch_payload, ProviderRequest};
pub use normalize::{normalize, MissingLikes, NormalizePolicy, NormalizedPost, PostKey, MAX_POSTS};
pub use relative_time::relative_time;
pub use shapes::PayloadShape;
