use crate::services::reports::ReportService;

pub struct AppState {
    pub reports: ReportService,
}
