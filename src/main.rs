//! Users API server.
//!
//! Loads configuration (optional TOML file plus the `PORT` environment
//! variable), installs logging, and serves until SIGINT/SIGTERM.

use std::path::PathBuf;

use clap::Parser;

use users_api::config;
use users_api::lifecycle::startup;
use users_api::observability::logging;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "In-memory users CRUD service", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "USERS_API_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging is configured from the file, so config errors go to stderr
    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    logging::init_tracing(&config.observability)?;

    tracing::info!("users-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed = config.store.seed,
        "Configuration loaded"
    );

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
