// Central Error Type for the Application

use crate::domain::PostId;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// NotFound for a job post id
    pub fn post_not_found(id: PostId) -> Self {
        AppError::NotFound(format!("Job post {} not found", id))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
