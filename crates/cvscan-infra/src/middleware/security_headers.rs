use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::{middleware::Next, response::Response};

const CONTENT_SECURITY_POLICY: &str = "default-src 'none'; frame-ancestors 'none'";
const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Which optional security headers to send
#[derive(Clone, Copy, Debug, Default)]
pub struct SecurityHeaders {
    /// Send `Strict-Transport-Security`. Only meaningful behind HTTPS.
    pub hsts: bool,
}

impl SecurityHeaders {
    pub fn for_environment(is_production: bool) -> Self {
        Self {
            hsts: is_production,
        }
    }
}

/// Adds security headers to every response.
///
/// The service only returns JSON, so the content security policy denies
/// everything.
pub async fn security_headers_middleware(
    State(policy): State<SecurityHeaders>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("no-referrer"));
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    if policy.hsts {
        headers.insert("Strict-Transport-Security", HeaderValue::from_static(HSTS));
    }

    response
}
