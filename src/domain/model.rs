use std::fmt;
use std::path::PathBuf;

use super::AppError;

/// Which stream to pick out of everything the provider offers for a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPolicy {
    HighestResolutionVideo,
    #[default]
    AudioOnly,
}

impl SelectionPolicy {
    /// Type-level description, independent of any value.
    pub const fn describe() -> &'static str {
        "Selects either the highest-resolution video stream or the first audio-only stream"
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectionPolicy::HighestResolutionVideo => "Best video",
            SelectionPolicy::AudioOnly => "Audio only",
        }
    }

    pub fn success_message(self, title: &str) -> String {
        match self {
            SelectionPolicy::HighestResolutionVideo => format!("Downloaded: {}", title),
            SelectionPolicy::AudioOnly => format!("Downloaded (Audio Only): {}", title),
        }
    }

    /// Picks the stream this policy asks for, or `None` when nothing matches.
    ///
    /// Highest resolution only considers streams with a video track; on equal
    /// resolution a stream that also carries audio wins. Audio only returns
    /// the first stream in provider order without a video track.
    pub fn select<'a>(self, streams: &'a [Stream]) -> Option<&'a Stream> {
        match self {
            SelectionPolicy::HighestResolutionVideo => streams
                .iter()
                .filter(|stream| stream.has_video)
                .max_by_key(|stream| (stream.resolution.unwrap_or(0), stream.has_audio)),
            SelectionPolicy::AudioOnly => streams
                .iter()
                .find(|stream| stream.has_audio && !stream.has_video),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One downloadable encoding of a video.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    pub format_id: String,
    pub extension: String,
    /// Frame height in pixels, when the stream has one.
    pub resolution: Option<u32>,
    pub has_video: bool,
    pub has_audio: bool,
    /// kbit/s
    pub audio_bitrate: Option<f64>,
}

impl Stream {
    /// Short human readable form, e.g. `1080p mp4` or `129kbps m4a`.
    pub fn summary(&self) -> String {
        match (self.resolution, self.audio_bitrate) {
            (Some(height), _) => format!("{}p {}", height, self.extension),
            (None, Some(abr)) => format!("{:.0}kbps {}", abr, self.extension),
            (None, None) => format!("format {} {}", self.format_id, self.extension),
        }
    }
}

/// Resolved metadata for a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoHandle {
    pub url: String,
    pub title: String,
    pub streams: Vec<Stream>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    pub title: String,
    pub policy: SelectionPolicy,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Downloading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Info,
    Error,
}

/// A modal message shown to the user after a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    pub fn from_result(result: &Result<DownloadOutcome, AppError>) -> Self {
        match result {
            Ok(outcome) => Self {
                level: NotificationLevel::Info,
                title: "Success",
                message: outcome.policy.success_message(&outcome.title),
            },
            Err(e @ AppError::InvalidInput) => Self {
                level: NotificationLevel::Warning,
                title: "Warning",
                message: e.to_string(),
            },
            Err(e @ AppError::Download(_)) => Self {
                level: NotificationLevel::Error,
                title: "Error",
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(format_id: &str, height: u32, has_audio: bool) -> Stream {
        Stream {
            format_id: format_id.to_string(),
            extension: "mp4".to_string(),
            resolution: Some(height),
            has_video: true,
            has_audio,
            audio_bitrate: None,
        }
    }

    fn audio(format_id: &str, kbps: f64) -> Stream {
        Stream {
            format_id: format_id.to_string(),
            extension: "m4a".to_string(),
            resolution: None,
            has_video: false,
            has_audio: true,
            audio_bitrate: Some(kbps),
        }
    }

    #[test]
    fn test_highest_resolution_picks_tallest() {
        let streams = vec![
            video("480p", 480, true),
            video("1080p", 1080, false),
            video("720p", 720, true),
        ];
        let chosen = SelectionPolicy::HighestResolutionVideo
            .select(&streams)
            .unwrap();
        assert_eq!(chosen.format_id, "1080p");
        assert!(streams
            .iter()
            .all(|s| s.resolution <= chosen.resolution));
    }

    #[test]
    fn test_highest_resolution_prefers_muxed_on_tie() {
        let streams = vec![video("720p-muxed", 720, true), video("720p-only", 720, false)];
        let chosen = SelectionPolicy::HighestResolutionVideo
            .select(&streams)
            .unwrap();
        assert_eq!(chosen.format_id, "720p-muxed");
    }

    #[test]
    fn test_highest_resolution_ignores_audio_streams() {
        let streams = vec![audio("audio-128k", 128.0)];
        assert!(SelectionPolicy::HighestResolutionVideo
            .select(&streams)
            .is_none());
    }

    #[test]
    fn test_audio_only_takes_first_in_order() {
        let streams = vec![
            video("video-720p", 720, true),
            audio("audio-128k", 128.0),
            audio("audio-160k", 160.0),
        ];
        let chosen = SelectionPolicy::AudioOnly.select(&streams).unwrap();
        assert_eq!(chosen.format_id, "audio-128k");
        assert!(!chosen.has_video);
    }

    #[test]
    fn test_audio_only_none_without_audio_stream() {
        let streams = vec![video("video-720p", 720, false)];
        assert!(SelectionPolicy::AudioOnly.select(&streams).is_none());
    }

    #[test]
    fn test_stream_summary() {
        assert_eq!(video("137", 1080, false).summary(), "1080p mp4");
        assert_eq!(audio("140", 129.4).summary(), "129kbps m4a");
    }

    #[test]
    fn test_notifications() {
        let ok = Ok(DownloadOutcome {
            title: "Clip".to_string(),
            policy: SelectionPolicy::AudioOnly,
            path: None,
        });
        let note = Notification::from_result(&ok);
        assert_eq!(note.level, NotificationLevel::Info);
        assert_eq!(note.message, "Downloaded (Audio Only): Clip");

        let empty = Notification::from_result(&Err(AppError::InvalidInput));
        assert_eq!(empty.level, NotificationLevel::Warning);
        assert_eq!(empty.message, "Enter a valid YouTube URL");

        let failed =
            Notification::from_result(&Err(AppError::Download("Video unavailable".to_string())));
        assert_eq!(failed.level, NotificationLevel::Error);
        assert_eq!(failed.message, "Failed to download: Video unavailable");
    }
}
