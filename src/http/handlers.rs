//! API endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::http::request::{QuoteParams, TimeSeriesParams};
use crate::http::server::AppState;
use crate::provider::{ProviderPayload, RelayError, RelayResult};

/// Decoded query pairs in request order. Repeated keys are kept, so a
/// duplicate parameter never fails extraction.
type QueryPairs = Query<Vec<(String, String)>>;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /api/health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

/// `GET /api/stock-data`
pub async fn stock_data(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> RelayResult<ProviderPayload> {
    let query = TimeSeriesParams::from_pairs(&pairs).resolve(&state.provider_config)?;

    tracing::debug!(
        symbol = %query.symbol,
        interval = %query.interval,
        outputsize = %query.outputsize,
        "Fetching time series"
    );

    state.provider.time_series(&query).await
}

/// `GET /api/quote`
pub async fn quote(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> RelayResult<ProviderPayload> {
    let symbol = QuoteParams::from_pairs(&pairs).resolve(&state.provider_config);

    tracing::debug!(symbol = %symbol, "Fetching quote");

    state
        .provider
        .quote(&symbol)
        .await
        .map_err(RelayError::into_generic)
}
