//! Response construction.
//!
//! Successful provider bodies go out byte-for-byte as JSON. Every
//! `RelayError` becomes `{"error": "<message>"}` with its mapped status.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;

use crate::provider::{ProviderPayload, RelayError};

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl RelayError {
    /// HTTP status reported to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingSymbol => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::BAD_REQUEST,
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::ApiKeyMissing
            | RelayError::Transport(_)
            | RelayError::Internal(_)
            | RelayError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind(), status = status.as_u16(), error = %self, "Request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ProviderPayload {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            self.body,
        )
            .into_response()
    }
}

/// Turn a handler panic into the generic 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected panic".to_string()
    };
    RelayError::Internal(detail).into_response()
}
