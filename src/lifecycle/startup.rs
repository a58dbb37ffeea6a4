//! Startup orchestration.
//!
//! Config is validated before this point. Subsystems start in order:
//! metrics exporter, listener, then the HTTP server. Any failure is fatal.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start every subsystem and serve until an OS signal arrives.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Server listening");
    tracing::info!(
        "Health check available at http://localhost:{}/health",
        local_addr.port()
    );

    let shutdown = Shutdown::new();
    signals::forward_signals(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
