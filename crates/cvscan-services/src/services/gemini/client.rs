use anyhow::{Context, Result};
use async_trait::async_trait;
use cvscan_core::GeminiConfig;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::services::ai_gateway::{AiGateway, AiGatewayError};

/// Returned in place of the completion when the response carries no text.
pub const NO_VALID_RESPONSE_MESSAGE: &str =
    "Could not get a valid response from the AI. Please try again.";

/// Gemini `generateContent` client
///
/// The key travels as the `key` query parameter, so the full request URL is
/// never logged.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client for Gemini")?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AiGateway for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(endpoint = %self.api_url, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, AiGatewayError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http_client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(AiGatewayError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(AiGatewayError::ClientHttp {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response.bytes().await.map_err(AiGatewayError::transport)?;
        let parsed = GenerateContentResponse::from_body(&body).map_err(|e| {
            tracing::warn!(error = %e, "Gemini response body could not be parsed");
            AiGatewayError::malformed(e)
        })?;

        match parsed.first_candidate_text() {
            Some(text) => {
                tracing::debug!(response_len = text.len(), "Gemini completion received");
                Ok(text.to_string())
            }
            None => {
                tracing::warn!("Gemini response contained no candidate text");
                Ok(NO_VALID_RESPONSE_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn client_for(url: String, timeout: Duration) -> GeminiClient {
        GeminiClient::new(&GeminiConfig {
            api_url: url,
            api_key: "test-key".to_string(),
            timeout,
        })
        .unwrap()
    }

    fn client(server: &mockito::Server) -> GeminiClient {
        client_for(format!("{}{}", server.url(), PATH), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "contents": [{"parts": [{"text": "Analyze this"}]}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Looks solid."}]}}]}"#)
            .create_async()
            .await;

        let text = client(&server).generate("Analyze this").await.unwrap();

        assert_eq!(text, "Looks solid.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_returns_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let text = client(&server).generate("prompt").await.unwrap();
        assert_eq!(text, NO_VALID_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_empty_object_returns_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let text = client(&server).generate("prompt").await.unwrap();
        assert_eq!(text, NO_VALID_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_absent_body_levels_return_fallback() {
        for body in [
            "",
            "null",
            r#"{"candidates":[null]}"#,
            r#"{"candidates":[{"content":{"parts":[null]}}]}"#,
        ] {
            let mut server = mockito::Server::new_async().await;
            let _mock = server
                .mock("POST", PATH)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await;

            let text = client(&server).generate("prompt").await.unwrap();
            assert_eq!(text, NO_VALID_RESPONSE_MESSAGE, "body: {:?}", body);
        }
    }

    #[tokio::test]
    async fn test_generate_ignores_unknown_fields() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]},"finishReason":"STOP"}],"usageMetadata":{"totalTokenCount":3}}"#,
            )
            .create_async()
            .await;

        let text = client(&server).generate("prompt").await.unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("model overloaded")
            .create_async()
            .await;

        let err = client(&server).generate("prompt").await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(matches!(err, AiGatewayError::ClientHttp { .. }));
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client(&server).generate("prompt").await.unwrap_err();

        assert!(matches!(err, AiGatewayError::Transport { .. }));
        assert!(err
            .to_string()
            .starts_with("An unexpected error occurred while communicating with the AI"));
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        let client = client_for(format!("http://127.0.0.1:1{}", PATH), Duration::from_secs(5));

        let err = client.generate("prompt").await.unwrap_err();

        assert!(matches!(err, AiGatewayError::Transport { .. }));
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn test_generate_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let client = client_for(format!("http://{}{}", addr, PATH), Duration::from_millis(200));
        let err = client.generate("prompt").await.unwrap_err();

        match err {
            AiGatewayError::Transport { ref reason, .. } => assert_eq!(reason, "request timed out"),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
