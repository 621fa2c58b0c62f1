mod app;
mod application;
mod config;
mod domain;
mod provider;
mod ui;

use iced::{window, Size};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::config::AppConfig;
use crate::domain::SelectionPolicy;

fn main() -> iced::Result {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();
    info!(
        "Starting {} (policy: {}, provider: {})",
        app::WINDOW_TITLE,
        config.startup_policy,
        config.provider.program
    );
    info!("{}", app::describe_app());
    info!("{}", SelectionPolicy::describe());

    let (width, height) = app::WINDOW_SIZE;

    iced::application(
        move || app::DownloadApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title(app::WINDOW_TITLE)
    .window(window::Settings {
        size: Size::new(width, height),
        resizable: false,
        ..Default::default()
    })
    .run()
}
