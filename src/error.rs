use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Message is required")]
    MissingMessage,
    #[error("Invalid JSON: {0}")]
    InvalidBody(String),
    #[error("API key not configured")]
    MissingApiKey,
    #[error("AI service temporarily unavailable")]
    Upstream { status: u16, body: String },
    #[error("AI service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Failures caused by the caller rather than by this deployment or the upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::MethodNotAllowed | AppError::MissingMessage | AppError::InvalidBody(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
