//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT/SIGTERM (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → HTTP server stops accepting, drains in-flight requests, exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
