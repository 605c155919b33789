//! In-memory document fixtures.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

pub const RESUME_TEXT: &str = "Experienced backend engineer, 5 years Go, led migration to Kubernetes.";
pub const RESUME_PREVIEW: &str =
    "Experienced backend engineer, 5 years Go, led migration to Kubernetes....";

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub fn create_docx(paragraphs: &[&str]) -> Vec<u8> {
    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("docx packs");
    cursor.into_inner()
}

pub fn resume_form(data: impl Into<Bytes>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(data.into())
        .file_name(file_name)
        .mime_type(mime_type);
    MultipartForm::new().add_part("resumeFile", part)
}
