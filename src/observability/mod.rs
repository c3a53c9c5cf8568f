//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and provider client produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//! Request spans and x-request-id come from tower-http (see http::server).
//! ```

pub mod logging;
pub mod metrics;
