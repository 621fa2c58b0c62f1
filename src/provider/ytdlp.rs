use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::models::{ProviderConfig, VideoInfo};
use super::{ProviderError, Result, StreamProvider};
use crate::domain::{Stream, VideoHandle};

#[derive(Debug, Clone)]
pub struct YtDlpClient {
    config: ProviderConfig,
}

impl YtDlpClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    async fn run(&self, args: &[&str]) -> Result<Output> {
        debug!("Running {} {:?}", self.config.program, args);

        let output = Command::new(&self.config.program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProviderError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(ProviderError::Failed(describe_failure(&stderr, &code)));
        }

        Ok(output)
    }
}

#[async_trait]
impl StreamProvider for YtDlpClient {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn resolve(&self, url: &str) -> Result<VideoHandle> {
        let output = self
            .run(&["--dump-json", "--no-download", "--no-playlist", "--no-warnings", url])
            .await?;

        let handle = parse_video_info(&output.stdout, url)?;
        info!(
            "Resolved \"{}\" with {} streams",
            handle.title,
            handle.streams.len()
        );
        Ok(handle)
    }

    async fn save(&self, video: &VideoHandle, stream: &Stream) -> Result<Option<PathBuf>> {
        info!("Saving format {} of \"{}\"", stream.format_id, video.title);

        let output = self
            .run(&[
                "--format",
                stream.format_id.as_str(),
                "--output",
                self.config.output_template.as_str(),
                "--no-playlist",
                "--no-warnings",
                "--no-progress",
                "--no-simulate",
                "--print",
                "after_move:filepath",
                video.url.as_str(),
            ])
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(PathBuf::from))
    }
}

fn parse_video_info(stdout: &[u8], url: &str) -> Result<VideoHandle> {
    let info: VideoInfo = serde_json::from_slice(stdout)
        .map_err(|e| ProviderError::InvalidResponse(format!("JSON decode error: {}", e)))?;
    Ok(info.into_handle(url))
}

/// Turns yt-dlp stderr into a one-line cause.
///
/// `ERROR: [youtube] abc: Video unavailable` becomes `Video unavailable`.
fn describe_failure(stderr: &str, exit_code: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let line = lines
        .iter()
        .rev()
        .find(|line| line.starts_with("ERROR:"))
        .or_else(|| lines.last());

    let Some(&line) = line else {
        return format!("yt-dlp exited with status {}", exit_code);
    };

    let message = line.strip_prefix("ERROR:").unwrap_or(line).trim_start();
    let Some((_, tail)) = message
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
    else {
        return message.to_string();
    };

    // Only a single-token video id is dropped; anything else is message text.
    let tail = tail.trim();
    match tail.split_once(": ") {
        Some((id, cause)) if !id.is_empty() && !id.contains(char::is_whitespace) => {
            cause.trim().to_string()
        }
        _ => tail.to_string(),
    }
}
