use iced::{
    widget::{button, column, radio, row, text, text_input, Space},
    Alignment, Element, Length,
};

use crate::domain::{DownloadPhase, SelectionPolicy};

/// Main view state. One instance per selection policy; a policy change
/// replaces the whole view.
pub struct DownloadView {
    pub url: String,
    pub policy: SelectionPolicy,
    pub phase: DownloadPhase,
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    PolicySelected(SelectionPolicy),
    DownloadPressed,
}

impl DownloadView {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            url: String::new(),
            policy,
            phase: DownloadPhase::Idle,
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.phase == DownloadPhase::Downloading
    }

    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.url = url;
            }
            DownloadMessage::PolicySelected(_) | DownloadMessage::DownloadPressed => {
                // Will be handled by the app
            }
        }
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let selected = Some(self.policy);
        let policies = row![
            radio(
                SelectionPolicy::HighestResolutionVideo.label(),
                SelectionPolicy::HighestResolutionVideo,
                selected,
                DownloadMessage::PolicySelected,
            )
            .size(14),
            radio(
                SelectionPolicy::AudioOnly.label(),
                SelectionPolicy::AudioOnly,
                selected,
                DownloadMessage::PolicySelected,
            )
            .size(14),
        ]
        .spacing(20);

        let status = if self.is_downloading() {
            "Downloading..."
        } else {
            ""
        };

        column![
            text("YouTube URL:").size(16),
            text_input("https://www.youtube.com/watch?v=...", &self.url)
                .on_input(DownloadMessage::UrlChanged)
                .on_submit(DownloadMessage::DownloadPressed)
                .padding(6),
            policies,
            Space::new().height(Length::Fixed(4.0)),
            button("Download")
                .on_press_maybe((!self.is_downloading()).then_some(DownloadMessage::DownloadPressed))
                .padding([6, 20]),
            text(status).size(12),
        ]
        .padding(12)
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
    }
}
