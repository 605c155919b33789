//! Document text extraction
//!
//! One extractor per [`DocumentFormat`](cvscan_core::DocumentFormat); dispatch
//! lives in [`extractor::extract`].

mod extractor;

pub use extractor::{extract, extract_text, ExtractionError};
