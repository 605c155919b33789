//! Multipart upload extraction

use axum::extract::Multipart;
use bytes::Bytes;
use cvscan_core::{AppError, UploadedDocument};

use crate::constants::RESUME_FIELD;
use crate::error::{HttpAppError, NO_FILE_MESSAGE};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const DEFAULT_FILENAME: &str = "unknown";

/// Read the single `resumeFile` field of a multipart form.
///
/// Other fields are drained and ignored. A missing field is reported with the
/// same message as an empty file.
pub async fn extract_resume_file(mut multipart: Multipart) -> Result<UploadedDocument, HttpAppError> {
    let mut document: Option<(Bytes, String, String)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        if document.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple file fields are not allowed; send exactly one field named '{}'",
                RESUME_FIELD
            ))
            .into());
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        let data = field.bytes().await?;

        document = Some((data, content_type, filename));
    }

    let (data, content_type, filename) =
        document.ok_or_else(|| AppError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;

    Ok(UploadedDocument::new(data, content_type, filename))
}
