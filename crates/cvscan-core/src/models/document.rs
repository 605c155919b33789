use bytes::Bytes;

pub const CONTENT_TYPE_PDF: &str = "application/pdf";
pub const CONTENT_TYPE_PLAIN_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document container formats we can pull text out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Resolve a declared MIME type. Parameters such as `; charset=utf-8` are
    /// ignored and the comparison is case-insensitive.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .map(str::trim)
            .unwrap_or(content_type)
            .to_lowercase();

        match essence.as_str() {
            CONTENT_TYPE_PDF => Some(DocumentFormat::Pdf),
            CONTENT_TYPE_DOCX => Some(DocumentFormat::Docx),
            CONTENT_TYPE_PLAIN_TEXT => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => CONTENT_TYPE_PDF,
            DocumentFormat::Docx => CONTENT_TYPE_DOCX,
            DocumentFormat::PlainText => CONTENT_TYPE_PLAIN_TEXT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "plain-text",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single uploaded file as received at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub data: Bytes,
    pub content_type: String,
    /// Only used in logs.
    pub filename: String,
}

impl UploadedDocument {
    pub fn new(
        data: impl Into<Bytes>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }
}
