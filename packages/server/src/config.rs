use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_APIFY_COUNTRY: &str = "Japan";

/// Application configuration loaded from environment variables.
///
/// Provider secrets are deliberately optional here: a missing token is
/// reported per request as a configuration error, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderSettings,
    pub keep_imageless: bool,
    pub showcase_data_path: Option<PathBuf>,
}

/// Which upstream feeds `/api/instagram`, with its credentials.
#[derive(Debug, Clone)]
pub enum ProviderSettings {
    Apify(ApifySettings),
    RapidApi(RapidApiSettings),
}

impl ProviderSettings {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderSettings::Apify(_) => "apify",
            ProviderSettings::RapidApi(_) => "rapidapi",
        }
    }
}

/// Pre-scraped variant: one fixed country backed by one Apify task.
#[derive(Debug, Clone)]
pub struct ApifySettings {
    pub country: String,
    /// Name of the env var the task id was looked up under, for error messages
    pub task_env_var: String,
    pub task_id: Option<String>,
    pub token: Option<String>,
    pub base_url: String,
}

/// Live-search variant: hashtag lookup through RapidAPI.
#[derive(Debug, Clone)]
pub struct RapidApiSettings {
    pub api_key: Option<String>,
    pub host: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let provider_name = var("INSTAGRAM_PROVIDER").unwrap_or_else(|| "apify".to_string());
        let provider = match provider_name.trim().to_ascii_lowercase().as_str() {
            "apify" => {
                let country =
                    var("APIFY_COUNTRY").unwrap_or_else(|| DEFAULT_APIFY_COUNTRY.to_string());
                let task_env_var = task_var_name(&country);
                let task_id = var(task_env_var.as_str()).or_else(|| var("APIFY_TASK_ID"));

                ProviderSettings::Apify(ApifySettings {
                    country,
                    task_env_var,
                    task_id,
                    token: var("APIFY_TOKEN"),
                    base_url: var("APIFY_BASE_URL")
                        .unwrap_or_else(|| apify_client::DEFAULT_BASE_URL.to_string()),
                })
            }
            "rapidapi" => {
                let host =
                    var("RAPIDAPI_HOST").unwrap_or_else(|| rapidapi_client::DEFAULT_HOST.to_string());
                let base_url = var("RAPIDAPI_BASE_URL").unwrap_or_else(|| format!("https://{}", host));

                ProviderSettings::RapidApi(RapidApiSettings {
                    api_key: var("RAPIDAPI_KEY"),
                    host,
                    base_url,
                })
            }
            other => bail!("INSTAGRAM_PROVIDER must be 'apify' or 'rapidapi', got '{}'", other),
        };

        let keep_imageless = match var("INSTAGRAM_KEEP_IMAGELESS") {
            Some(v) => v
                .parse::<bool>()
                .context("INSTAGRAM_KEEP_IMAGELESS must be 'true' or 'false'")?,
            None => false,
        };

        Ok(Self {
            port,
            provider,
            keep_imageless,
            showcase_data_path: var("SHOWCASE_DATA_PATH").map(PathBuf::from),
        })
    }
}

/// `Japan` -> `APIFY_TASK_JAPAN`, `New Zealand` -> `APIFY_TASK_NEW_ZEALAND`.
fn task_var_name(country: &str) -> String {
    format!(
        "APIFY_TASK_{}",
        country.trim().to_ascii_uppercase().replace(' ', "_")
    )
}
