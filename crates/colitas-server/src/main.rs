//! Directory server binary for Colitas Felices.
//!
//! Loads configuration and the shelter and veterinary data, compiles the
//! page templates, and serves the directory over HTTP until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `colitas-config.yaml` (optional)
//! 2. Initialize structured logging (tracing)
//! 3. Load the directory data; no request is served before this completes
//! 4. Compile the page templates
//! 5. Serve the HTTP API and pages

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use colitas_web::{AppState, Renderer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingConfig};
use crate::error::AppError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "colitas-config.yaml";

/// Application entry point for the directory server.
///
/// # Errors
///
/// Returns an error if configuration, data loading, template compilation,
/// or the server itself fails. The process then exits with a non-zero
/// status.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration.
    let config = AppConfig::load(Path::new(CONFIG_PATH))?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("colitas-server starting");

    run(&config)
        .await
        .inspect_err(|e| error!(error = %e, "colitas-server failed"))
}

async fn run(config: &AppConfig) -> Result<(), AppError> {
    info!(
        host = config.server.host,
        port = config.server.port,
        shelters = %config.data.shelters_path.display(),
        veterinarias = %config.data.veterinarias_path.display(),
        "Configuration loaded"
    );

    // 3. Load the directory.
    let directory = colitas_directory::load_directory(
        &config.data.shelters_path,
        &config.data.veterinarias_path,
    )?;

    // 4. Compile templates.
    let renderer = match &config.templates.dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Loading page templates");
            Renderer::from_dir(dir)?
        }
        None => Renderer::builtin()?,
    };

    // 5. Serve.
    let state = Arc::new(AppState::new(directory, renderer));
    colitas_web::start_server(&config.server, state).await?;
    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
