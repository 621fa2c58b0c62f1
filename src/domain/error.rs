use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Enter a valid YouTube URL")]
    InvalidInput,

    #[error("Failed to download: {0}")]
    Download(String),
}
