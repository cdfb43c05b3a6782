// Travel Feed - API Core
//
// Serves normalized Instagram travel posts from a configured scraping
// provider, plus the bundled showcase page and its demo dataset.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
