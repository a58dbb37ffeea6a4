//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listener port.
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

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    apply_port(&mut config, std::env::var(PORT_ENV).ok().as_deref())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file, without environment
/// overrides.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Replace the port of `listener.bind_address` with `port`, if given.
///
/// An empty value counts as unset.
pub fn apply_port(config: &mut ServiceConfig, port: Option<&str>) -> Result<(), ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let port: u16 = raw.parse().map_err(|_| ConfigError::Port(raw.to_string()))?;

    // Leave a malformed bind address for validation to report
    if let Ok(mut addr) = config.listener.bind_address.parse::<SocketAddr>() {
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }
    Ok(())
}
