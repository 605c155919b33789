//! cvscan Infrastructure Library
//!
//! Shared infrastructure for the HTTP service:
//! - Middleware (request ID, security headers)
//! - Tracing subscriber setup

pub mod middleware;
pub mod telemetry;

// Re-export commonly used types
pub use middleware::{
    request_id_middleware, security_headers_middleware, RequestId,
    SecurityHeaders, REQUEST_ID_HEADER,
};
pub use telemetry::{init_telemetry, shutdown_telemetry};
