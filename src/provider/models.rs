use serde::Deserialize;

use crate::domain::{Stream, VideoHandle};

/// Subset of the `yt-dlp --dump-json` document we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub formats: Vec<FormatInfo>,
    /// Single-format results carry the format fields at the top level.
    #[serde(flatten)]
    pub format: Option<FormatInfo>,
}

/// One entry of the `formats` array.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatInfo {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub height: Option<u32>,
    pub abr: Option<f64>,
}

impl FormatInfo {
    fn has_video(&self) -> bool {
        match self.vcodec.as_deref() {
            Some("none") => false,
            Some(_) => true,
            None => self.height.is_some(),
        }
    }

    fn has_audio(&self) -> bool {
        match self.acodec.as_deref() {
            Some("none") => false,
            Some(_) => true,
            None => self.abr.is_some(),
        }
    }
}

impl From<FormatInfo> for Stream {
    fn from(format: FormatInfo) -> Self {
        let has_video = format.has_video();
        let has_audio = format.has_audio();
        Stream {
            format_id: format.format_id,
            extension: format.ext,
            resolution: if has_video { format.height } else { None },
            has_video,
            has_audio,
            audio_bitrate: format.abr,
        }
    }
}

impl VideoInfo {
    pub fn into_handle(self, url: &str) -> VideoHandle {
        let title = if self.title.is_empty() {
            self.id
        } else {
            self.title
        };

        let formats = if self.formats.is_empty() {
            self.format.into_iter().collect()
        } else {
            self.formats
        };

        VideoHandle {
            url: url.to_string(),
            title,
            streams: formats.into_iter().map(Stream::from).collect(),
        }
    }
}

/// Configuration for the yt-dlp backed provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Executable name or path
    pub program: String,
    /// yt-dlp output template, relative to the working directory
    pub output_template: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            output_template: "%(title)s.%(ext)s".to_string(),
        }
    }
}
