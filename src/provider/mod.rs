//! Upstream provider subsystem.
//!
//! # Data Flow
//! ```text
//! Handler (validated query)
//!     → client.rs (attach API key, single GET with timeout)
//!     → Provider REST API (time_series / quote)
//!     → types.rs (status + embedded error marker → RelayError)
//!     → verbatim body back to the handler
//! ```
//!
//! # Constraints
//! - The API key only ever travels in the outbound query string
//! - Exactly one outbound call per request, never retried

pub mod client;
pub mod types;

pub use client::ProviderClient;
pub use types::{ProviderPayload, RelayError, RelayResult, TimeSeriesQuery};
