//! Route configuration and setup.

mod health;

use crate::constants::{API_BASE, API_PREFIX, MULTIPART_OVERHEAD_BYTES};
use crate::handlers::resume_check;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use cvscan_core::Config;
use cvscan_infra::{request_id_middleware, security_headers_middleware, SecurityHeaders};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let security_headers = SecurityHeaders::for_environment(config.is_production());
    let body_limit = config
        .max_upload_size_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    tracing::info!(
        http_concurrency_limit = config.http_concurrency_limit,
        request_timeout_secs = config.request_timeout.as_secs(),
        body_limit_bytes = body_limit,
        "HTTP layers configured"
    );

    let api_routes = Router::new().route("/check-resume", post(resume_check::check_resume));

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            &format!("{}/openapi.json", API_BASE),
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .nest(API_PREFIX, api_routes)
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn_with_state(
            security_headers,
            security_headers_middleware,
        ))
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvscan_core::{GeminiConfig, LogFormat};
    use std::time::Duration;

    fn config_with_origins(origins: &[&str]) -> Config {
        Config {
            server_port: 8080,
            environment: "development".to_string(),
            cors_origins: origins.iter().map(|s| s.to_string()).collect(),
            max_upload_size_bytes: 1024 * 1024,
            allowed_content_types: cvscan_core::config::default_allowed_content_types(),
            request_timeout: Duration::from_secs(30),
            http_concurrency_limit: 16,
            log_format: LogFormat::Pretty,
            gemini: GeminiConfig {
                api_url: "http://127.0.0.1:1/generate".to_string(),
                api_key: "test-key".to_string(),
                timeout: Duration::from_secs(5),
            },
        }
    }

    #[test]
    fn test_cors_accepts_explicit_origins() {
        assert!(setup_cors(&config_with_origins(&["http://localhost:5173"])).is_ok());
    }

    #[test]
    fn test_cors_accepts_wildcard() {
        assert!(setup_cors(&config_with_origins(&["*"])).is_ok());
    }

    #[test]
    fn test_cors_rejects_unparseable_origin() {
        assert!(setup_cors(&config_with_origins(&["http://bad\norigin"])).is_err());
    }
}
