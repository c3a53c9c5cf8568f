//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "TWELVE_DATA_API_KEY";

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    Port(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML file into a configuration without validating it.
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply `TWELVE_DATA_API_KEY` and `PORT` on top of `config`.
///
/// `lookup` abstracts the environment so callers can pass `std::env::var`
/// or a fixed map.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
        config.provider.api_key = Some(key);
    }

    if let Some(port) = lookup(PORT_ENV).filter(|p| !p.is_empty()) {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::Port(port.clone()))?;
        config.listener.set_port(port);
    }

    Ok(())
}

/// Build the process configuration: optional TOML file, then environment
/// overrides, then validation. Read once at startup.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => RelayConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
