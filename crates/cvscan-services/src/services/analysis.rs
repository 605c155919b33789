//! Analysis orchestrator
//!
//! Extraction failures are returned as errors because there is nothing to
//! report on. AI failures are folded into the result so the caller still sees
//! the preview of what was read.

use std::sync::Arc;

use cvscan_core::{text_preview, AnalysisResult, DocumentFormat, UploadedDocument};
use cvscan_processing::{extract, ExtractionError};

use crate::services::ai_gateway::AiGateway;
use crate::services::prompt::build_prompt;

pub const NO_TEXT_MESSAGE: &str =
    "Could not extract any text from the resume. Please ensure it's not an image-only file or empty.";

/// Prefix of the message returned when the AI call fails.
pub const AI_FAILURE_PREFIX: &str = "An error occurred during AI analysis: ";

#[derive(Clone)]
pub struct AnalysisService {
    gateway: Arc<dyn AiGateway>,
}

impl AnalysisService {
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            filename = %document.filename,
            content_type = %document.content_type,
            size_bytes = document.data.len()
        )
    )]
    pub async fn analyze(&self, document: UploadedDocument) -> Result<AnalysisResult, ExtractionError> {
        let format = DocumentFormat::from_content_type(&document.content_type)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(document.content_type.clone()))?;

        // Parsers are synchronous and CPU bound.
        let data = document.data;
        let text = tokio::task::spawn_blocking(move || extract(&data, format))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, format = %format, "Document extraction task failed");
                ExtractionError::corrupt(format, "document parser crashed")
            })??;

        if text.trim().is_empty() {
            tracing::info!("No text extracted from document");
            return Ok(AnalysisResult::new(NO_TEXT_MESSAGE, None));
        }

        let preview = text_preview(&text);
        let prompt = build_prompt(&text);

        tracing::info!(text_len = text.len(), "Sending extracted text for AI analysis");
        match self.gateway.generate(&prompt).await {
            Ok(analysis) => Ok(AnalysisResult::new(analysis, Some(preview))),
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "AI analysis failed");
                Ok(AnalysisResult::new(
                    format!("{}{}", AI_FAILURE_PREFIX, e),
                    Some(preview),
                ))
            }
        }
    }
}
