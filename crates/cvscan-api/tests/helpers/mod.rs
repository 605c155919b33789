//! Test helpers: build the router around a stub AI gateway.
//!
//! Run from workspace root: `cargo test -p cvscan-api`.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum_test::TestServer;
use cvscan_api::constants;
use cvscan_api::setup::{routes, services};
use cvscan_core::{Config, GeminiConfig, LogFormat};
use cvscan_services::{AiGateway, AiGatewayError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// API path prefix for tests (e.g. `/api/v1`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        max_upload_size_bytes: MAX_UPLOAD_BYTES,
        allowed_content_types: cvscan_core::config::default_allowed_content_types(),
        request_timeout: Duration::from_secs(30),
        http_concurrency_limit: 64,
        log_format: LogFormat::Pretty,
        gemini: GeminiConfig {
            api_url: "http://127.0.0.1:1/v1beta/models/test:generateContent".to_string(),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        },
    }
}

/// Gateway returning a canned reply and counting calls.
pub struct StubGateway {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiGateway for StubGateway {
    async fn generate(&self, _prompt: &str) -> Result<String, AiGatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(AiGatewayError::ClientHttp {
                status: *status,
                body: "service unavailable".to_string(),
            }),
        }
    }
}

pub fn server_with(config: &Config, gateway: Arc<dyn AiGateway>) -> TestServer {
    let state = services::build_state(config, gateway);
    let router = routes::setup_routes(config, state).expect("routes build");
    TestServer::new(router).expect("test server starts")
}

pub fn setup_test_server(gateway: Arc<dyn AiGateway>) -> TestServer {
    server_with(&test_config(), gateway)
}
