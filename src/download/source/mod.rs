//! Media extraction abstraction layer.
//!
//! The `MediaSource` trait is the seam between the request flow and the
//! extraction tool. `YtDlpSource` is the production backend; tests plug in
//! their own implementations.

pub mod ytdlp;

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::download::error::DownloadError;

/// Which stream the extraction tool should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode {
    /// Best audio-only stream
    Audio,
    /// Best single-file mp4 stream, falling back to whatever is best
    Video,
}

impl DownloadMode {
    /// yt-dlp `--format` selector for this mode
    pub fn format_selector(self) -> &'static str {
        match self {
            DownloadMode::Audio => "bestaudio/best",
            DownloadMode::Video => "best[ext=mp4]/best",
        }
    }
}

impl std::fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadMode::Audio => write!(f, "audio"),
            DownloadMode::Video => write!(f, "video"),
        }
    }
}

/// Request parameters for a single extraction.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// URL to download from
    pub url: Url,
    pub mode: DownloadMode,
}

/// A finished extraction: the file on disk and its display title.
#[derive(Debug, Clone)]
pub struct DownloadOutput {
    pub file_path: PathBuf,
    pub title: String,
}

/// Trait for extraction backends.
///
/// `fetch` resolves the URL, writes the media file to disk and reports where it
/// landed. Implementations must keep the async runtime responsive while the
/// download runs.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Human-readable name of this source (e.g., "yt-dlp")
    fn name(&self) -> &str;

    /// Execute the download.
    async fn fetch(&self, request: &DownloadRequest) -> Result<DownloadOutput, DownloadError>;
}
