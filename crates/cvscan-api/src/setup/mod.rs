//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod services;

use anyhow::{Context, Result};
use cvscan_core::Config;

use crate::constants::SERVICE_NAME;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<axum::Router> {
    config.validate().context("Configuration validation failed")?;

    cvscan_infra::init_telemetry(SERVICE_NAME, &config.environment, config.log_format)?;

    tracing::info!(gemini = ?config.gemini, "Configuration loaded and validated successfully");

    let state = services::initialize_services(&config)?;

    let router = routes::setup_routes(&config, state)?;

    Ok(router)
}
