//! Provider query types and error definitions.

use axum::body::Bytes;
use serde_json::Value;
use thiserror::Error;

/// Message used when the provider flags an error without saying why.
pub const UNKNOWN_PROVIDER_ERROR: &str = "Unknown API error";

/// Fully resolved time-series query, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesQuery {
    pub symbol: String,
    pub interval: String,
    pub outputsize: String,
}

/// Successful provider response body, kept byte-for-byte.
#[derive(Debug, Clone)]
pub struct ProviderPayload {
    pub body: Bytes,
}

/// Errors surfaced by the relay endpoints.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller sent an empty `symbol`.
    #[error("Symbol is required")]
    MissingSymbol,

    /// No provider API key is configured on the server.
    #[error("API key not configured on server")]
    ApiKeyMissing,

    /// The provider did not answer within the timeout.
    #[error("Request to Twelve Data timed out")]
    Timeout,

    /// Connection or protocol failure talking to the provider.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-200 status.
    #[error("Twelve Data API returned status {0}")]
    UpstreamStatus(u16),

    /// The provider answered 200 but flagged an error in the body.
    #[error("{0}")]
    Upstream(String),

    /// Anything else that went wrong while handling the request.
    #[error("Server error: {0}")]
    Internal(String),

    /// A failure reported with its bare description and no prefix.
    #[error("{0}")]
    Failed(String),
}

impl RelayError {
    /// Error category used for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MissingSymbol => "validation",
            RelayError::ApiKeyMissing => "configuration",
            RelayError::Timeout => "timeout",
            RelayError::Transport(_) => "transport",
            RelayError::UpstreamStatus(_) | RelayError::Upstream(_) => "upstream",
            RelayError::Internal(_) | RelayError::Failed(_) => "generic",
        }
    }

    /// Collapse failures the quote endpoint does not distinguish into a
    /// generic server error carrying only the failure description.
    /// Client-facing 400s and the configuration error pass through unchanged.
    pub fn into_generic(self) -> Self {
        match self {
            RelayError::Timeout | RelayError::Transport(_) | RelayError::UpstreamStatus(_) => {
                RelayError::Failed(self.to_string())
            }
            other => other,
        }
    }
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// Return the provider's message if `body` carries `"status": "error"`.
pub fn embedded_error(body: &Value) -> Option<String> {
    if body.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_PROVIDER_ERROR);
    Some(message.to_string())
}
