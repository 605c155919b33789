//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Lower-layer errors convert into
//! `AppError` here so every failure renders with the same status table and body.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cvscan_core::{AppError, ErrorMetadata, LogLevel};
use cvscan_processing::{ExtractionError, ValidationError};
use serde::Serialize;
use utoipa::ToSchema;

pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const INVALID_FILE_TYPE_MESSAGE: &str =
    "Invalid file type. Please upload a PDF, DOCX, or TXT file.";

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether retrying the same request can succeed
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::EmptyFile => AppError::InvalidInput(NO_FILE_MESSAGE.to_string()),
            ValidationError::InvalidContentType { .. } => {
                AppError::InvalidInput(INVALID_FILE_TYPE_MESSAGE.to_string())
            }
            ValidationError::FileTooLarge { max, .. } => AppError::PayloadTooLarge(format!(
                "File size exceeds maximum allowed size of {} MB",
                max / 1024 / 1024
            )),
        };
        HttpAppError(app)
    }
}

impl From<ExtractionError> for HttpAppError {
    fn from(err: ExtractionError) -> Self {
        let app = match err {
            ExtractionError::UnsupportedFormat(_) => AppError::UnsupportedMediaType(err.to_string()),
            ExtractionError::CorruptDocument { .. } => {
                AppError::UnprocessableDocument(err.to_string())
            }
        };
        HttpAppError(app)
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        let app = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge("Request body exceeds the upload limit".to_string())
        } else {
            AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl HttpAppError {
    /// Render the error. `expose_details` adds the error chain and type for
    /// non-sensitive errors; callers pass `!config.is_production()`.
    pub fn into_response_for(self, expose_details: bool) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let hide_details = !expose_details || app_error.is_sensitive();
        let body = ErrorResponse {
            error: app_error.client_message(),
            details: (!hide_details).then(|| app_error.detailed_message()),
            error_type: (!hide_details).then(|| app_error.error_type().to_string()),
            code: app_error.error_code().to_string(),
            recoverable: app_error.is_recoverable(),
            suggested_action: app_error.suggested_action().map(String::from),
        };

        (status, Json(body)).into_response()
    }
}

/// Without configuration at hand details are always hidden.
impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        self.into_response_for(false)
    }
}
