//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use cvscan_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cvscan API",
        version = "0.1.0",
        description = "Resume analysis API. Upload a PDF, DOCX or plain-text resume and receive a generative AI review with a preview of the extracted text."
    ),
    paths(handlers::resume_check::check_resume),
    components(schemas(models::AnalysisResult, error::ErrorResponse)),
    tags((name = "resume", description = "Resume analysis"))
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
