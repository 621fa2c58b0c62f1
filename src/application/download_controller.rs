use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::{AppError, DownloadOutcome, SelectionPolicy},
    provider::StreamProvider,
};

/// Runs one resolve, select, save cycle against a stream provider.
#[derive(Clone)]
pub struct DownloadController {
    provider: Arc<dyn StreamProvider>,
}

impl DownloadController {
    pub fn new(provider: Arc<dyn StreamProvider>) -> Self {
        Self { provider }
    }

    /// Returns the trimmed URL, or `InvalidInput` when nothing usable was typed.
    pub fn validate_url(url: &str) -> Result<&str, AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::InvalidInput);
        }
        Ok(url)
    }

    pub async fn download(
        &self,
        url: &str,
        policy: SelectionPolicy,
    ) -> Result<DownloadOutcome, AppError> {
        let url = Self::validate_url(url)?;
        info!("Downloading {} ({})", url, policy);

        let result = self.run(url, policy).await;
        if let Err(e) = &result {
            warn!("{} download failed: {}", self.provider.name(), e);
        }
        result
    }

    async fn run(&self, url: &str, policy: SelectionPolicy) -> Result<DownloadOutcome, AppError> {
        let video = self
            .provider
            .resolve(url)
            .await
            .map_err(|e| AppError::Download(e.to_string()))?;

        let stream = policy.select(&video.streams).ok_or_else(|| {
            AppError::Download(match policy {
                SelectionPolicy::HighestResolutionVideo => "no video stream available".to_string(),
                SelectionPolicy::AudioOnly => "no audio-only stream available".to_string(),
            })
        })?;
        info!("Selected {} for \"{}\"", stream.summary(), video.title);

        let path = self
            .provider
            .save(&video, stream)
            .await
            .map_err(|e| AppError::Download(e.to_string()))?;

        Ok(DownloadOutcome {
            title: video.title,
            policy,
            path,
        })
    }
}
