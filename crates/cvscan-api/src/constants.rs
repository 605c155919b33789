//! API constants

/// API base path prefix (version-independent)
pub const API_BASE: &str = "/api";

/// Versioned prefix for all resume endpoints.
pub const API_PREFIX: &str = "/api/v1";

/// Multipart field carrying the uploaded resume.
pub const RESUME_FIELD: &str = "resumeFile";

/// Slack added to the body limit for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub const SERVICE_NAME: &str = "cvscan";
