use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of characters of extracted text echoed back to the caller.
pub const PREVIEW_MAX_CHARS: usize = 200;
const PREVIEW_SUFFIX: &str = "...";

/// Outcome of analysing one document.
///
/// `message` is either the AI analysis or a human-readable explanation of why
/// there is none. The preview is absent only when no text could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text_preview: Option<String>,
}

impl AnalysisResult {
    pub fn new(message: impl Into<String>, extracted_text_preview: Option<String>) -> Self {
        Self {
            message: message.into(),
            extracted_text_preview,
        }
    }
}

/// First [`PREVIEW_MAX_CHARS`] characters of `text` followed by `...`.
///
/// The suffix is appended even when nothing was cut off.
pub fn text_preview(text: &str) -> String {
    let end = text
        .char_indices()
        .nth(PREVIEW_MAX_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}{}", &text[..end], PREVIEW_SUFFIX)
}
