use std::sync::Arc;

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use tracing::{debug, info};

use crate::application::DownloadController;
use crate::config::AppConfig;
use crate::domain::{
    AppError, DownloadOutcome, DownloadPhase, Notification, NotificationLevel, SelectionPolicy,
};
use crate::provider::YtDlpClient;
use crate::ui::{DownloadMessage, DownloadView};

pub const WINDOW_TITLE: &str = "YouTube Downloader";
pub const WINDOW_SIZE: (f32, f32) = (400.0, 200.0);

/// Free-standing description of the application.
pub const fn describe_app() -> &'static str {
    "Paste a video link and press Download to save it in the working directory"
}

pub struct DownloadApp {
    view: DownloadView,
    controller: DownloadController,
}

impl DownloadApp {
    pub fn new(config: AppConfig) -> Self {
        let provider = Arc::new(YtDlpClient::new(config.provider));

        Self {
            view: DownloadView::new(config.startup_policy),
            controller: DownloadController::new(provider),
        }
    }

    /// Drops the current view and builds a fresh one for `policy`.
    fn swap_policy(&mut self, policy: SelectionPolicy) {
        debug!("Swapping view to {}", policy);
        self.view = DownloadView::new(policy);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    DownloadFinished(Result<DownloadOutcome, AppError>),
    NotificationClosed,
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                DownloadMessage::PolicySelected(policy) => {
                    if !app.view.is_downloading() && policy != app.view.policy {
                        app.swap_policy(policy);
                    }
                }
                DownloadMessage::DownloadPressed => {
                    if app.view.is_downloading() {
                        return Task::none();
                    }

                    let url = match DownloadController::validate_url(&app.view.url) {
                        Ok(url) => url.to_string(),
                        Err(e) => return notify(Notification::from_result(&Err(e))),
                    };

                    let controller = app.controller.clone();
                    let policy = app.view.policy;
                    app.view.phase = DownloadPhase::Downloading;

                    return Task::perform(
                        async move { controller.download(&url, policy).await },
                        Message::DownloadFinished,
                    );
                }
                DownloadMessage::UrlChanged(_) => {}
            }
        }
        Message::DownloadFinished(result) => {
            app.view.phase = DownloadPhase::Idle;
            if let Ok(DownloadOutcome {
                title,
                path: Some(path),
                ..
            }) = &result
            {
                info!("Saved \"{}\" to {}", title, path.display());
            }
            return notify(Notification::from_result(&result));
        }
        Message::NotificationClosed => {}
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

fn notify(notification: Notification) -> Task<Message> {
    let level = match notification.level {
        NotificationLevel::Warning => MessageLevel::Warning,
        NotificationLevel::Info => MessageLevel::Info,
        NotificationLevel::Error => MessageLevel::Error,
    };

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(level)
                .set_title(notification.title)
                .set_description(notification.message)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::NotificationClosed,
    )
}
