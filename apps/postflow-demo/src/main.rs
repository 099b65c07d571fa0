//! # Postflow Demo
//!
//! Wires configuration, telemetry and storage, then walks one post through
//! the approval workflow and prints what the UI would show.

mod config;
mod state;
mod telemetry;
mod views;
mod walkthrough;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?;
    tracing::info!(
        backend = ?config.storage.backend,
        reset = config.reset_on_start,
        "Starting Postflow demo"
    );

    let state = AppState::new(&config).await?;
    walkthrough::run(&state).await
}
