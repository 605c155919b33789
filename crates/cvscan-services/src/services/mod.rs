pub mod ai_gateway;
pub mod analysis;
pub mod gemini;
pub mod prompt;
