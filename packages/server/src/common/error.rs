//! Request-terminal errors for the public API.

use apify_client::ApifyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rapidapi_client::RapidApiError;
use serde::Serialize;
use thiserror::Error;

const UPSTREAM_ERROR: &str = "Instagram API error";
const TRANSPORT_ERROR: &str = "Failed to fetch Instagram posts";

/// Every failure a request can end in. Normalization problems are not here:
/// they degrade to an empty post list instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required secret is missing (500)
    #[error("{0}")]
    Configuration(String),

    /// Missing or unknown request parameter (400)
    #[error("{0}")]
    Validation(String),

    /// Provider answered with a non-success status (propagated)
    #[error("{details}")]
    Upstream {
        status: u16,
        details: String,
        upstream_body: Option<String>,
    },

    /// Network failure or unreadable provider response (500)
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_body: Option<&'a str>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) | ApiError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Configuration(message) | ApiError::Validation(message) => ErrorBody {
                error: message,
                details: None,
                upstream_body: None,
            },
            ApiError::Upstream {
                details,
                upstream_body,
                ..
            } => ErrorBody {
                error: UPSTREAM_ERROR,
                details: Some(details),
                upstream_body: upstream_body.as_deref(),
            },
            ApiError::Transport(details) => ErrorBody {
                error: TRANSPORT_ERROR,
                details: Some(details),
                upstream_body: None,
            },
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ApifyError> for ApiError {
    fn from(err: ApifyError) -> Self {
        match err {
            // Apify error bodies are logged by the caller, never echoed
            ApifyError::Api { status, .. } => ApiError::Upstream {
                status,
                details: format!("Apify returned status {}", status),
                upstream_body: None,
            },
            ApifyError::Http(e) => ApiError::Transport(e.to_string()),
        }
    }
}

impl From<RapidApiError> for ApiError {
    fn from(err: RapidApiError) -> Self {
        match err {
            RapidApiError::Api { status, body } => ApiError::Upstream {
                status,
                details: format!("RapidAPI returned status {}", status),
                upstream_body: Some(body),
            },
            RapidApiError::Http(e) => ApiError::Transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::Configuration("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Transport("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_is_propagated() {
        let err = ApiError::from(ApifyError::Api {
            status: 403,
            message: "forbidden".into(),
        });
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Apify returned status 403");
    }

    #[test]
    fn test_rapidapi_upstream_keeps_raw_body() {
        let err = ApiError::from(RapidApiError::Api {
            status: 429,
            body: "quota".into(),
        });
        match err {
            ApiError::Upstream {
                status,
                upstream_body,
                ..
            } => {
                assert_eq!(status, 429);
                assert_eq!(upstream_body.as_deref(), Some("quota"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unrepresentable_upstream_status_becomes_bad_gateway() {
        let err = ApiError::Upstream {
            status: 42,
            details: "odd".into(),
            upstream_body: None,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
