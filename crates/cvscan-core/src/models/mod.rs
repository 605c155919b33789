//! Data models for the application
//!
//! `document` holds the inbound upload and its format; `analysis` holds the
//! result handed back to the caller.

mod analysis;
mod document;

pub use analysis::*;
pub use document::*;
