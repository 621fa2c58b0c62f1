mod models;
mod ytdlp;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Stream, VideoHandle};

pub use models::ProviderConfig;
pub use ytdlp::YtDlpClient;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Failed(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Resolves URLs into streams and writes a chosen stream to disk.
#[async_trait]
pub trait StreamProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch title and available streams for `url`.
    async fn resolve(&self, url: &str) -> Result<VideoHandle>;

    /// Download `stream` into the current working directory.
    /// Returns the written path when the provider reports one.
    async fn save(&self, video: &VideoHandle, stream: &Stream) -> Result<Option<PathBuf>>;
}
