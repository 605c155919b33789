//! cvscan Processing Library
//!
//! Plain-text extraction from uploaded documents and validation of uploads at
//! the HTTP boundary.

pub mod document;
pub mod validator;

pub use document::{extract, extract_text, ExtractionError};
pub use validator::{UploadValidator, ValidationError};
