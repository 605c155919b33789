//! Gemini `generateContent` client.

mod client;
pub mod types;

pub use client::{GeminiClient, NO_VALID_RESPONSE_MESSAGE};
