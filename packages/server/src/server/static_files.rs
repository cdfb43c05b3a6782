use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use rust_embed::RustEmbed;

use crate::domains::showcase::Dataset;

// Embed the demo dataset at compile time so the binary runs standalone
#[derive(RustEmbed)]
#[folder = "data/"]
pub struct DataAssets;

const DATASET_FILE: &str = "posts.json";

/// Load the showcase dataset from `path`, or the embedded copy when unset.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let bytes: Cow<'static, [u8]> = match path {
        Some(path) => Cow::Owned(
            std::fs::read(path)
                .with_context(|| format!("Failed to read showcase dataset {}", path.display()))?,
        ),
        None => {
            DataAssets::get(DATASET_FILE)
                .context("Embedded showcase dataset is missing")?
                .data
        }
    };

    Dataset::from_json(&bytes).context("Failed to parse showcase dataset")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_covers_every_country() {
        let dataset = load_dataset(None).unwrap();

        for country in crate::domains::instagram::Country::ALL {
            let posts = dataset.for_country(country.name());
            assert!(!posts.instagram.is_empty(), "no instagram posts for {country}");
            assert!(!posts.reddit.is_empty(), "no reddit posts for {country}");
        }
    }

    #[test]
    fn test_missing_override_file_is_an_error() {
        let err = load_dataset(Some(Path::new("/nonexistent/posts.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read showcase dataset"));
    }
}
