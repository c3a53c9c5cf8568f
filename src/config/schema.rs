//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream provider settings.
    pub provider: ProviderConfig,

    /// Static frontend settings.
    pub frontend: FrontendConfig,

    /// Cross-origin settings for browser clients.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

pub const DEFAULT_PORT: u16 = 5000;

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_PORT),
        }
    }
}

impl ListenerConfig {
    /// Keep the configured host but listen on `port`.
    pub fn set_port(&mut self, port: u16) {
        let host = match self.bind_address.rsplit_once(':') {
            Some((host, _)) if !host.is_empty() => host.to_string(),
            _ => "0.0.0.0".to_string(),
        };
        self.bind_address = format!("{}:{}", host, port);
    }
}

/// Upstream financial-data provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider REST root (e.g., "https://api.twelvedata.com").
    pub base_url: String,

    /// Server-side API key. Usually supplied through `TWELVE_DATA_API_KEY`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Total time allowed for one outbound call, in milliseconds.
    pub timeout_ms: u64,

    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,

    /// Ticker used when the caller omits `symbol`.
    pub default_symbol: String,

    /// Bar granularity used when the caller omits `interval`.
    pub default_interval: String,

    /// Point count used when the caller omits `outputsize`.
    pub default_outputsize: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twelvedata.com".to_string(),
            api_key: None,
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            default_symbol: "QQQ".to_string(),
            default_interval: "1min".to_string(),
            default_outputsize: "100".to_string(),
        }
    }
}

impl ProviderConfig {
    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Static frontend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Serve the frontend bundle alongside the API.
    pub enabled: bool,

    /// Directory holding `index.html` and its assets.
    pub static_dir: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            static_dir: "static".to_string(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Attach CORS headers to responses.
    pub enabled: bool,

    /// Allowed origins. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
