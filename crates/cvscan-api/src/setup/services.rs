//! Service initialization and application state setup

use anyhow::{Context, Result};
use cvscan_core::Config;
use cvscan_processing::UploadValidator;
use cvscan_services::{AiGateway, AnalysisService, GeminiClient};
use std::sync::Arc;

use crate::state::AppState;

/// Build the application state around the configured Gemini endpoint
pub fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let gemini = GeminiClient::new(&config.gemini).context("Failed to initialize Gemini client")?;
    tracing::info!(
        timeout_secs = config.gemini.timeout.as_secs(),
        "Gemini client initialized"
    );

    Ok(build_state(config, Arc::new(gemini)))
}

/// Assemble state around any AI gateway.
pub fn build_state(config: &Config, gateway: Arc<dyn AiGateway>) -> Arc<AppState> {
    let validator = UploadValidator::new(
        config.max_upload_size_bytes,
        config.allowed_content_types.clone(),
    );

    Arc::new(AppState {
        config: config.clone(),
        analysis: AnalysisService::new(gateway),
        validator,
    })
}
