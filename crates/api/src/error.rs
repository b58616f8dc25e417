//! Error types for DomRobot sessions and calls.

use inwx_types::status::response_code;
use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between opening a session and closing it.
///
/// API-level failures carry the complete response body so callers can
/// surface every structured sub-error the server returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Login failed: {}", summarize(.0))]
    Auth(Value),

    #[error("API error: {}", summarize(.0))]
    Remote(Value),

    #[error("Logout failed: {}", summarize(.0))]
    Close(Value),

    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("Two-factor authentication required but no shared secret is configured")]
    SharedSecretRequired,

    #[error("Invalid shared secret: {0}")]
    InvalidSharedSecret(String),

    #[error("Invalid API endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl ApiError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// The remote response body attached to API-level failures.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Auth(body) | Self::Remote(body) | Self::Close(body) => Some(body),
            _ => None,
        }
    }
}

fn summarize(body: &Value) -> String {
    let message = body.get("msg").and_then(Value::as_str).unwrap_or("no message");
    match response_code(body) {
        Some(code) => format!("{code} {message}"),
        None => format!("missing status code ({message})"),
    }
}
