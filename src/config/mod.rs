//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment (TWELVE_DATA_API_KEY, PORT)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is read once at process start and never changes
//! - All fields have defaults so the relay runs with no file at all
//! - A missing API key is legal at startup; requests report it

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CorsConfig, FrontendConfig, ListenerConfig, ObservabilityConfig, ProviderConfig, RelayConfig,
};
pub use validation::ValidationError;
