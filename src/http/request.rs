//! Request handling: query parameters and request IDs.
//!
//! # Responsibilities
//! - Decode endpoint query parameters, first occurrence of a key wins
//! - Apply configured defaults for parameters the caller omitted
//! - Generate a UUID v4 `x-request-id` for each incoming request

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::config::ProviderConfig;
use crate::provider::{RelayError, RelayResult, TimeSeriesQuery};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// First value for `key`, ignoring any repeats.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query string accepted by `/api/stock-data`.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesParams {
    pub symbol: Option<String>,
    pub interval: Option<String>,
    pub outputsize: Option<String>,
}

impl TimeSeriesParams {
    /// Pick the parameters out of decoded query pairs. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            symbol: first_value(pairs, "symbol"),
            interval: first_value(pairs, "interval"),
            outputsize: first_value(pairs, "outputsize"),
        }
    }

    /// Fill in defaults for absent parameters.
    ///
    /// Only absence triggers a default: an explicit empty `symbol` is a
    /// validation error. `interval` and `outputsize` pass through unchecked.
    pub fn resolve(self, defaults: &ProviderConfig) -> RelayResult<TimeSeriesQuery> {
        let symbol = self
            .symbol
            .unwrap_or_else(|| defaults.default_symbol.clone());
        if symbol.is_empty() {
            return Err(RelayError::MissingSymbol);
        }

        Ok(TimeSeriesQuery {
            symbol,
            interval: self
                .interval
                .unwrap_or_else(|| defaults.default_interval.clone()),
            outputsize: self
                .outputsize
                .unwrap_or_else(|| defaults.default_outputsize.clone()),
        })
    }
}

/// Query string accepted by `/api/quote`.
#[derive(Debug, Clone, Default)]
pub struct QuoteParams {
    pub symbol: Option<String>,
}

impl QuoteParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            symbol: first_value(pairs, "symbol"),
        }
    }

    pub fn resolve(self, defaults: &ProviderConfig) -> String {
        self.symbol
            .unwrap_or_else(|| defaults.default_symbol.clone())
    }
}

/// `MakeRequestId` producing UUID v4 values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
