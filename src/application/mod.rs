pub mod download_controller;

pub use download_controller::DownloadController;
