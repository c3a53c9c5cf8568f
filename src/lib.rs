//! Stock data relay library.
//!
//! Forwards browser requests for time series and quotes to the Twelve Data
//! REST API, attaching the server-side API key, and serves the static
//! frontend.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod provider;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use provider::{ProviderClient, RelayError};
