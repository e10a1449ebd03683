//! API error types.
//!
//! Every failure of a hashtag lookup ends up as one of these variants and is
//! rendered as `{"error": "<message>"}` with a fixed status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback message for failures that carry no description
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Result type for proxy operations
pub type ProxyResult<T> = Result<T, ProxyError>;

/// Errors that can occur while serving a hashtag lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Hashtag parameter is required")]
    MissingParameter,

    #[error("API configuration error")]
    MissingConfiguration,

    #[error("Instagram API responded with status: {0}")]
    UpstreamStatus(u16),

    #[error("{}", describe_failure(.0))]
    UpstreamRequest(String),
}

fn describe_failure(description: &str) -> &str {
    if description.is_empty() {
        UNEXPECTED_ERROR
    } else {
        description
    }
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter => StatusCode::BAD_REQUEST,
            ProxyError::MissingConfiguration
            | ProxyError::UpstreamStatus(_)
            | ProxyError::UpstreamRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::UpstreamRequest(err.to_string())
    }
}

/// Error envelope returned to callers
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
