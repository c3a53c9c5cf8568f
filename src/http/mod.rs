//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, static fallback)
//!     → request.rs (request ID, query decoding and defaults)
//!     → handlers.rs (health / stock-data / quote)
//!     → provider client (single outbound call)
//!     → response.rs (verbatim body or JSON error envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
