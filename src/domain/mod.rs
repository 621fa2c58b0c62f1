pub mod error;
pub mod model;

pub use error::AppError;
pub use model::{
    DownloadOutcome, DownloadPhase, Notification, NotificationLevel, SelectionPolicy, Stream,
    VideoHandle,
};
