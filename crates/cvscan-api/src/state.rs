//! Application state shared by handlers.

use cvscan_core::Config;
use cvscan_processing::UploadValidator;
use cvscan_services::AnalysisService;

pub struct AppState {
    pub config: Config,
    pub analysis: AnalysisService,
    pub validator: UploadValidator,
}
