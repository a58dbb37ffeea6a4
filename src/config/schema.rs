//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML, and every
//! section defaults so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the users service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Response hardening and body limits.
    pub security: SecurityConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,

    /// Initial store contents.
    pub store: StoreConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000"). The `PORT` environment variable
    /// replaces the port part.
    pub bind_address: String,
}

pub const DEFAULT_PORT: u16 = 3000;

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed per request in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add hardening response headers.
    pub enable_headers: bool,
    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
    /// Maximum JSON body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            cors_enabled: true,
            max_body_size: 100 * 1024, // 100KB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the two sample users.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.security.max_body_size, 100 * 1024);
        assert!(config.store.seed);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_section() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [security]
            cors_enabled = false

            [store]
            seed = false
            "#,
        )
        .unwrap();
        assert!(!config.security.cors_enabled);
        assert!(config.security.enable_headers);
        assert!(!config.store.seed);
    }
}
