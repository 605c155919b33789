//! Configuration module
//!
//! Settings are read from the process environment. `backend.env` and `.env`
//! files are loaded first when present so local runs need no exported vars.

use std::env;
use std::time::Duration;

use crate::models::{CONTENT_TYPE_DOCX, CONTENT_TYPE_PDF, CONTENT_TYPE_PLAIN_TEXT};

const SERVER_PORT: u16 = 8080;
const MAX_UPLOAD_SIZE_MB: usize = 10;
const MAX_UPLOAD_SIZE_LIMIT_MB: usize = 1024;
const BYTES_PER_MB: usize = 1024 * 1024;
const GEMINI_TIMEOUT_SECS: u64 = 60;
const REQUEST_TIMEOUT_SECS: u64 = 120;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
const ENV_FILE: &str = "backend.env";

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Generative AI endpoint settings
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

// The key must never end up in logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_upload_size_bytes: usize,
    pub allowed_content_types: Vec<String>,
    pub request_timeout: Duration,
    pub http_concurrency_limit: usize,
    pub log_format: LogFormat,
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::from_filename(ENV_FILE).ok();
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .map(|s| {
                s.split(',')
                    .map(|ct| ct.trim().to_lowercase())
                    .filter(|ct| !ct.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_allowed_content_types());

        let gemini = GeminiConfig {
            api_url: env::var("GEMINI_API_URL")
                .map_err(|_| anyhow::anyhow!("GEMINI_API_URL must be set"))?,
            api_key: env::var("GEMINI_API_KEY")
                .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY must be set"))?,
            timeout: Duration::from_secs(
                env::var("GEMINI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| GEMINI_TIMEOUT_SECS.to_string())
                    .parse()
                    .map_err(|_| anyhow::anyhow!("GEMINI_TIMEOUT_SECS must be a valid number"))?,
            ),
        };

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            max_upload_size_bytes: upload_size_bytes(max_upload_size_mb).ok_or_else(|| {
                anyhow::anyhow!(
                    "MAX_UPLOAD_SIZE_MB cannot exceed {} MB",
                    MAX_UPLOAD_SIZE_LIMIT_MB
                )
            })?,
            allowed_content_types,
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(REQUEST_TIMEOUT_SECS)
                    .max(1),
            ),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            gemini,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_API_KEY cannot be empty"));
        }

        let url = self.gemini.api_url.trim();
        if url.is_empty() {
            return Err(anyhow::anyhow!("GEMINI_API_URL cannot be empty"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "GEMINI_API_URL must start with http:// or https://"
            ));
        }

        if self.gemini.timeout.is_zero() {
            return Err(anyhow::anyhow!("GEMINI_TIMEOUT_SECS must be greater than 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }
        if self.max_upload_size_bytes > MAX_UPLOAD_SIZE_LIMIT_MB * BYTES_PER_MB {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_MB cannot exceed {} MB",
                MAX_UPLOAD_SIZE_LIMIT_MB
            ));
        }

        if self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!("ALLOWED_CONTENT_TYPES cannot be empty"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

/// Megabytes to bytes. `None` on overflow.
fn upload_size_bytes(megabytes: usize) -> Option<usize> {
    megabytes.checked_mul(BYTES_PER_MB)
}

pub fn default_allowed_content_types() -> Vec<String> {
    vec![
        CONTENT_TYPE_PDF.to_string(),
        CONTENT_TYPE_PLAIN_TEXT.to_string(),
        CONTENT_TYPE_DOCX.to_string(),
    ]
}
