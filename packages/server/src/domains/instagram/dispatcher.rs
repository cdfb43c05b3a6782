//! Turn a request into exactly one provider call.

use apify_client::ApifyClient;
use rapidapi_client::RapidApiClient;
use tracing::{error, info};

use crate::common::ApiError;
use crate::config::{ApifySettings, ProviderSettings, RapidApiSettings};

use super::country::Country;
use super::normalize::{MissingLikes, NormalizePolicy};

/// A fully validated outbound call, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRequest {
    /// Last successful run of a pre-configured Apify task
    ApifyTask {
        country: String,
        task_id: String,
        token: String,
        base_url: String,
    },
    /// Live RapidAPI hashtag search
    HashtagSearch {
        country: Country,
        hashtag: &'static str,
        api_key: String,
        host: String,
        base_url: String,
    },
}

impl ProviderRequest {
    pub fn provider_name(&self) -> &'static str {
        match self {
            ProviderRequest::ApifyTask { .. } => "apify",
            ProviderRequest::HashtagSearch { .. } => "rapidapi",
        }
    }

    /// Label stamped on every post of the response.
    pub fn country_label(&self) -> &str {
        match self {
            ProviderRequest::ApifyTask { country, .. } => country,
            ProviderRequest::HashtagSearch { country, .. } => country.name(),
        }
    }

    /// How this provider's records are normalized.
    pub fn normalize_policy(&self, keep_imageless: bool) -> NormalizePolicy {
        let missing_likes = match self {
            ProviderRequest::ApifyTask { .. } => MissingLikes::Zero,
            ProviderRequest::HashtagSearch { .. } => MissingLikes::Fabricate,
        };

        NormalizePolicy {
            require_image: !keep_imageless,
            missing_likes,
        }
    }
}

/// Validate configuration and input, and pick the provider call.
///
/// Secrets are checked first, so a misconfigured deployment answers 500
/// whatever the caller sent. The pre-scraped variant ignores `country`.
pub fn dispatch(
    settings: &ProviderSettings,
    country: Option<&str>,
) -> Result<ProviderRequest, ApiError> {
    match settings {
        ProviderSettings::Apify(apify) => dispatch_apify(apify),
        ProviderSettings::RapidApi(rapid) => dispatch_hashtag(rapid, country),
    }
}

fn dispatch_apify(settings: &ApifySettings) -> Result<ProviderRequest, ApiError> {
    let task_id = settings.task_id.clone().ok_or_else(|| {
        ApiError::Configuration(format!("{} env var not configured", settings.task_env_var))
    })?;
    let token = settings
        .token
        .clone()
        .ok_or_else(|| ApiError::Configuration("API token not configured".to_string()))?;

    Ok(ProviderRequest::ApifyTask {
        country: settings.country.clone(),
        task_id,
        token,
        base_url: settings.base_url.clone(),
    })
}

fn dispatch_hashtag(
    settings: &RapidApiSettings,
    country: Option<&str>,
) -> Result<ProviderRequest, ApiError> {
    let api_key = settings
        .api_key
        .clone()
        .ok_or_else(|| ApiError::Configuration("API key not configured".to_string()))?;

    let name = country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::Validation("Country parameter is required".to_string()))?;

    let country = Country::from_name(name)
        .ok_or_else(|| ApiError::Validation(format!("Unsupported country: {}", name)))?;

    Ok(ProviderRequest::HashtagSearch {
        country,
        hashtag: country.hashtag(),
        api_key,
        host: settings.host.clone(),
        base_url: settings.base_url.clone(),
    })
}

/// Send the one outbound call and return the raw JSON body.
pub async fn fetch_payload(
    http: &reqwest::Client,
    request: &ProviderRequest,
) -> Result<serde_json::Value, ApiError> {
    match request {
        ProviderRequest::ApifyTask {
            country,
            task_id,
            token,
            base_url,
        } => {
            info!(country = %country, task_id = %task_id, "Fetching pre-scraped posts from Apify");

            ApifyClient::with_http_client(http.clone(), token.clone())
                .with_base_url(base_url.as_str())
                .last_task_run_items::<serde_json::Value>(task_id)
                .await
                .map_err(|e| {
                    error!(error = %e, status = ?e.status(), "Apify API error");
                    ApiError::from(e)
                })
        }
        ProviderRequest::HashtagSearch {
            country,
            hashtag,
            api_key,
            host,
            base_url,
        } => {
            info!(country = %country, hashtag, "Searching Instagram hashtag via RapidAPI");

            RapidApiClient::with_http_client(http.clone(), api_key.clone(), host.clone())
                .with_base_url(base_url.as_str())
                .search_hashtag(hashtag)
                .await
                .map_err(|e| {
                    error!(error = %e, "RapidAPI error");
                    ApiError::from(e)
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apify(task_id: Option<&str>, token: Option<&str>) -> ProviderSettings {
        ProviderSettings::Apify(ApifySettings {
            country: "Japan".into(),
            task_env_var: "APIFY_TASK_JAPAN".into(),
            task_id: task_id.map(String::from),
            token: token.map(String::from),
            base_url: "http://apify.test".into(),
        })
    }

    fn rapidapi(api_key: Option<&str>) -> ProviderSettings {
        ProviderSettings::RapidApi(RapidApiSettings {
            api_key: api_key.map(String::from),
            host: "ig.test".into(),
            base_url: "http://ig.test".into(),
        })
    }

    #[test]
    fn test_every_supported_country_selects_its_hashtag() {
        for country in Country::ALL {
            let request = dispatch(&rapidapi(Some("k")), Some(country.name())).unwrap();
            match request {
                ProviderRequest::HashtagSearch { hashtag, .. } => {
                    assert_eq!(hashtag, country.hashtag())
                }
                other => panic!("unexpected request: {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_or_unknown_country_is_validation_error() {
        for input in [None, Some(""), Some("   "), Some("Atlantis"), Some("japan")] {
            let err = dispatch(&rapidapi(Some("k")), input).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "input {input:?}");
        }
    }

    #[test]
    fn test_missing_secret_wins_over_bad_country() {
        let err = dispatch(&rapidapi(None), Some("Atlantis")).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_apify_requires_task_then_token() {
        let err = dispatch(&apify(None, Some("t")), None).unwrap_err();
        assert_eq!(err.to_string(), "APIFY_TASK_JAPAN env var not configured");

        let err = dispatch(&apify(Some("task"), None), None).unwrap_err();
        assert_eq!(err.to_string(), "API token not configured");
    }

    #[test]
    fn test_apify_ignores_requested_country() {
        let request = dispatch(&apify(Some("task"), Some("t")), Some("Italy")).unwrap();

        assert_eq!(request.country_label(), "Japan");
        assert_eq!(request.provider_name(), "apify");
        assert_eq!(
            request.normalize_policy(false),
            NormalizePolicy {
                require_image: true,
                missing_likes: MissingLikes::Zero,
            }
        );
    }

    #[test]
    fn test_hashtag_search_fabricates_missing_likes() {
        let request = dispatch(&rapidapi(Some("k")), Some(" Thailand ")).unwrap();

        assert_eq!(request.country_label(), "Thailand");
        assert_eq!(
            request.normalize_policy(true),
            NormalizePolicy {
                require_image: false,
                missing_likes: MissingLikes::Fabricate,
            }
        );
    }
}
