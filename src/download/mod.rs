//! Download management and processing

pub mod downloader;
pub mod error;
pub mod source;
pub mod ytdlp;
pub mod ytdlp_errors;

// Re-exports for convenience
pub use downloader::{download_and_send, DeliverySettings, DownloadOutcome};
pub use error::DownloadError;
pub use source::{ytdlp::YtDlpSource, DownloadMode, DownloadOutput, DownloadRequest, MediaSource};
