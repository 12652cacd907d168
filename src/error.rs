//! Error types for the Remote API toolkit.
//!
//! This module contains the custom error type shared by the HTTP adapter, the
//! tools and both host adapters. It provides:
//! - `RemoteError`: The main error enum that covers all possible error cases
//! - Conversions from various error types (`reqwest`, `serde_json`, etc.)
//! - Conversion to RMCP's `ErrorData` for MCP protocol compliance

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A non-2xx reply from the Remote API.
    #[error("API Error: {status} {status_text}{}", body_suffix(.body))]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RemoteError {
    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {body}")
    }
}

impl From<RemoteError> for ErrorData {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::InvalidParams(msg) => Self::new(ErrorCode::INVALID_PARAMS, msg, None),
            RemoteError::Config(msg) => Self::new(ErrorCode::INTERNAL_ERROR, msg, None),
            RemoteError::Http(e) => {
                Self::new(ErrorCode::INTERNAL_ERROR, format!("HTTP error: {e}"), None)
            }
            RemoteError::HttpMiddleware(e) => Self::new(
                ErrorCode::INTERNAL_ERROR,
                format!("HTTP middleware error: {e}"),
                None,
            ),
            other => Self::new(ErrorCode::INTERNAL_ERROR, other.to_string(), None),
        }
    }
}
