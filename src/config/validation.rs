//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module covers the semantic ones
//! (addresses parse, timeouts are positive, the provider URL is usable).
//! Every problem is reported, not just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("provider.base_url '{0}' is not a valid http(s) URL")]
    BaseUrl(String),

    #[error("provider.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("provider.default_symbol must not be empty")]
    EmptyDefaultSymbol,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    MetricsAddress(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match url::Url::parse(&config.provider.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::BaseUrl(config.provider.base_url.clone())),
    }

    if config.provider.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("timeout_ms"));
    }
    if config.provider.connect_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_ms"));
    }

    if config.provider.default_symbol.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultSymbol);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
