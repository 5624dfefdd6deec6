//! Outpost server binary.
//!
//! Wires the engine and the HTTP transport together: loads the YAML
//! configuration, constructs the single process-wide economy, and
//! serves it until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `outpost-config.yaml` (or `OUTPOST_CONFIG`)
//! 3. Construct the shared economy from the economy config
//! 4. Build the application state and router
//! 5. Serve until terminated

use std::path::Path;
use std::sync::Arc;

use outpost_engine::{OutpostConfig, SharedEconomy};
use outpost_server::server::start_server;
use outpost_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default path of the configuration file, next to the workspace root.
const DEFAULT_CONFIG_PATH: &str = "outpost-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. A missing file is not an error: the
    //    defaults encode the canonical starting state.
    let config_path =
        std::env::var("OUTPOST_CONFIG").unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));
    let config = if Path::new(&config_path).exists() {
        OutpostConfig::from_file(Path::new(&config_path))?
    } else {
        OutpostConfig::default()
    };

    // 2. Initialize structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!(path = %config_path, "outpost-server starting");
    info!(
        starting_minerals = config.economy.starting_minerals,
        starting_energy = config.economy.starting_energy,
        "economy configured"
    );

    // 3. Construct the one live economy and inject it into the transport.
    let economy = SharedEconomy::new(&config.economy);
    let state = Arc::new(AppState::new(economy));

    // 4. Serve.
    start_server(&config.transport, state).await?;

    Ok(())
}
