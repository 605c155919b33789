use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use cvscan_core::AnalysisResult;
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_resume_file;

/// Analyse an uploaded resume.
///
/// Unreadable documents are rejected with an error status. A failed AI call
/// still answers 200, with the failure described in `message`.
#[utoipa::path(
    post,
    path = "/api/v1/check-resume",
    tag = "resume",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Form with a single `resumeFile` part (PDF, DOCX or plain text)"),
    responses(
        (status = 200, description = "Analysis result, possibly describing an AI failure", body = AnalysisResult),
        (status = 400, description = "Missing, empty or disallowed file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "No text extractor for this file type", body = ErrorResponse),
        (status = 422, description = "Document could not be read", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn check_resume(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match analyze_upload(&state, multipart).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => err.into_response_for(!state.config.is_production()),
    }
}

async fn analyze_upload(
    state: &AppState,
    multipart: Multipart,
) -> Result<AnalysisResult, HttpAppError> {
    let document = extract_resume_file(multipart).await?;

    state
        .validator
        .validate_all(&document.content_type, document.data.len())?;

    tracing::info!(
        filename = %document.filename,
        content_type = %document.content_type,
        size_bytes = document.data.len(),
        "Resume received"
    );

    let result = state.analysis.analyze(document).await?;

    Ok(result)
}
