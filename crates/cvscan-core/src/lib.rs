//! cvscan Core Library
//!
//! This crate provides the domain models, error types and configuration
//! shared across all cvscan components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, GeminiConfig, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{text_preview, AnalysisResult, DocumentFormat, UploadedDocument};
