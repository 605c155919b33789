//! cvscan Services Layer
//!
//! This crate is the business service layer: prompt construction, the
//! generative AI gateway and the analysis orchestrator that ties extraction
//! and the gateway together. Keep thin HTTP handling in cvscan-api.

pub mod services;

pub use services::ai_gateway::{AiGateway, AiGatewayError};
pub use services::analysis::{AnalysisService, AI_FAILURE_PREFIX, NO_TEXT_MESSAGE};
pub use services::gemini::{GeminiClient, NO_VALID_RESPONSE_MESSAGE};
pub use services::prompt::build_prompt;
