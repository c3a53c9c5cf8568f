//! Provider REST client with timeout and error handling.
//!
//! # Responsibilities
//! - Build time-series and quote requests with the server-side API key
//! - Bound every call with the configured timeout
//! - Translate provider statuses and embedded error markers into `RelayError`

use std::time::{Duration, Instant};
use tokio::time::timeout;
use url::Url;

use crate::config::ProviderConfig;
use crate::observability::metrics;
use crate::provider::types::{
    embedded_error, ProviderPayload, RelayError, RelayResult, TimeSeriesQuery,
};

const TIME_SERIES_ENDPOINT: &str = "time_series";
const QUOTE_ENDPOINT: &str = "quote";

/// Client for the provider's `time_series` and `quote` endpoints.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    timeout_duration: Duration,
}

impl ProviderClient {
    /// Create a new provider client.
    ///
    /// A missing API key is accepted here; every call then fails with
    /// `RelayError::ApiKeyMissing` before touching the network.
    pub fn new(config: &ProviderConfig) -> RelayResult<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            RelayError::Internal(format!("Invalid provider URL '{}': {}", config.base_url, e))
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(concat!("stock-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key().map(str::to_string),
            timeout_duration: Duration::from_millis(config.timeout_ms),
        })
    }

    /// Whether an API key is available for outbound calls.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch a time series for `query`.
    pub async fn time_series(&self, query: &TimeSeriesQuery) -> RelayResult<ProviderPayload> {
        self.get(
            TIME_SERIES_ENDPOINT,
            &[
                ("symbol", query.symbol.as_str()),
                ("interval", query.interval.as_str()),
                ("outputsize", query.outputsize.as_str()),
            ],
        )
        .await
    }

    /// Fetch the latest quote for `symbol`.
    pub async fn quote(&self, symbol: &str) -> RelayResult<ProviderPayload> {
        self.get(QUOTE_ENDPOINT, &[("symbol", symbol)]).await
    }

    async fn get(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> RelayResult<ProviderPayload> {
        let result = self.send(endpoint, params).await;
        if let Err(e) = &result {
            metrics::record_upstream_error(endpoint, e.kind());
        }
        result
    }

    async fn send(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> RelayResult<ProviderPayload> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::ApiKeyMissing)?;
        let url = self.endpoint_url(endpoint)?;
        let start = Instant::now();

        let request = self
            .http
            .get(url)
            .query(params)
            .query(&[("apikey", api_key)]);

        // Deadline covers both the response head and the body.
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match timeout(self.timeout_duration, exchange).await {
            Ok(Ok(pair)) => pair,
            Ok(Err(e)) => {
                let e = e.without_url();
                tracing::warn!(endpoint, error = %e, "Provider request failed");
                return Err(if e.is_timeout() {
                    RelayError::Timeout
                } else {
                    RelayError::Transport(e.to_string())
                });
            }
            Err(_) => {
                tracing::warn!(
                    endpoint,
                    timeout_ms = self.timeout_duration.as_millis() as u64,
                    "Provider request timed out"
                );
                return Err(RelayError::Timeout);
            }
        };

        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Provider responded"
        );

        if status != reqwest::StatusCode::OK {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let parsed: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| RelayError::Internal(format!("invalid JSON from provider: {}", e)))?;

        if let Some(message) = embedded_error(&parsed) {
            tracing::info!(endpoint, message = %message, "Provider reported an error");
            return Err(RelayError::Upstream(message));
        }

        Ok(ProviderPayload { body })
    }

    fn endpoint_url(&self, endpoint: &str) -> RelayResult<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| RelayError::Internal(format!("Invalid provider endpoint: {}", e)))
    }
}
