//! Format dispatch and per-format text extraction.
//!
//! Every extractor takes the complete document in memory and returns the full
//! text. Parsers hold no state between calls.

use cvscan_core::DocumentFormat;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

/// Errors raised while turning a document into text
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported file type for text extraction: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {format} document: {reason}")]
    CorruptDocument {
        format: DocumentFormat,
        reason: String,
    },
}

impl ExtractionError {
    pub fn corrupt(format: DocumentFormat, reason: impl std::fmt::Display) -> Self {
        ExtractionError::CorruptDocument {
            format,
            reason: reason.to_string(),
        }
    }
}

/// Extract text from `data` declared as `content_type`.
///
/// Unknown content types fail with [`ExtractionError::UnsupportedFormat`]
/// without looking at the bytes.
pub fn extract_text(data: &[u8], content_type: &str) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_content_type(content_type).ok_or_else(|| {
        tracing::warn!(content_type = %content_type, "Unsupported content type for text extraction");
        ExtractionError::UnsupportedFormat(content_type.to_string())
    })?;

    extract(data, format)
}

/// Extract text from a document of a known format.
pub fn extract(data: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    tracing::debug!(format = %format, size_bytes = data.len(), "Extracting document text");

    let text = match format {
        DocumentFormat::Pdf => extract_pdf(data)?,
        DocumentFormat::Docx => extract_docx(data)?,
        DocumentFormat::PlainText => extract_plain_text(data),
    };

    tracing::debug!(format = %format, text_len = text.len(), "Document text extracted");
    Ok(text)
}

fn extract_plain_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| {
        tracing::warn!(error = %e, "PDF text extraction failed");
        ExtractionError::corrupt(DocumentFormat::Pdf, e)
    })
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(data).map_err(|e| {
        tracing::warn!(error = %e, "DOCX parsing failed");
        ExtractionError::corrupt(DocumentFormat::Docx, e)
    })?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_paragraph(&mut text, paragraph),
            DocumentChild::Table(table) => push_table(&mut text, table),
            _ => {}
        }
    }

    Ok(text)
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(out, &paragraph.children);
    out.push('\n');
}

fn push_paragraph_children(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(out, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(out, &link.children),
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

// Cells are emitted row by row, one line per cell paragraph.
#[allow(irrefutable_let_patterns)]
fn push_table(out: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => push_paragraph(out, paragraph),
                    TableCellContent::Table(nested) => push_table(out, nested),
                    _ => {}
                }
            }
        }
    }
}
