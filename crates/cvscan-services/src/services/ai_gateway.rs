//! Generative AI gateway abstraction.

use async_trait::async_trait;

/// Failure of a single completion call.
///
/// Callers treat both variants as "the AI call failed"; the split only
/// matters for logs and the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AiGatewayError {
    /// The endpoint answered with a non-2xx status.
    #[error("Failed to call Gemini API: {status} - {body}")]
    ClientHttp { status: u16, body: String },

    /// Network failure, timeout or an unreadable response body.
    #[error("An unexpected error occurred while communicating with the AI: {reason}")]
    Transport {
        reason: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AiGatewayError {
    /// Wrap a reqwest failure. The URL is stripped because it carries the API key.
    pub fn transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect to the AI service".to_string()
        } else if err.is_decode() {
            "malformed response body".to_string()
        } else {
            err.to_string()
        };

        AiGatewayError::Transport {
            reason,
            source: Box::new(err),
        }
    }

    /// A 2xx body that is not a `generateContent` response.
    pub fn malformed(err: serde_json::Error) -> Self {
        AiGatewayError::Transport {
            reason: "malformed response body".to_string(),
            source: Box::new(err),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AiGatewayError::ClientHttp { status, .. } => Some(*status),
            AiGatewayError::Transport { .. } => None,
        }
    }
}

/// Text completion provider. One call, one attempt.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Send `prompt` and return the completion text.
    async fn generate(&self, prompt: &str) -> Result<String, AiGatewayError>;
}
