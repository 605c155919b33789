//! cvscan API Library
//!
//! HTTP handlers, error rendering and application setup for the resume
//! analysis service.

mod api_doc;
pub mod constants;
mod handlers;
mod utils;

pub mod error;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
