//! Structured logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `log_level` applies to this crate
/// and to `tower_http`.
pub fn init_tracing(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.log_level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(config.json_logs.then(|| fmt::layer().json()))
        .with((!config.json_logs).then(fmt::layer))
        .try_init()
}

fn default_directives(level: &str) -> String {
    format!("users_api={level},tower_http={level}")
}
