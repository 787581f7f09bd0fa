//! Application state shared across all handlers

use jobboard_core::application::JobBoardService;

#[derive(Clone)]
pub struct AppState {
    pub job_board: JobBoardService,
}

impl AppState {
    pub fn new(job_board: JobBoardService) -> Self {
        Self { job_board }
    }
}
