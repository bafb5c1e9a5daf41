use std::fmt;

/// Structured error type for extraction operations.
///
/// Every variant carries the text that is shown to the user verbatim.
#[derive(Debug)]
pub enum DownloadError {
    /// yt-dlp reported a failure (bad exit code, unsupported URL, unavailable content)
    YtDlp(String),
    /// yt-dlp exited cleanly but the expected file is missing
    FileNotFound(String),
    /// Spawning or waiting on the yt-dlp process failed
    Process(String),
    /// yt-dlp output could not be understood
    Metadata(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DownloadError {}

impl DownloadError {
    /// Returns subcategory for log lines
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::YtDlp(_) => "ytdlp",
            DownloadError::FileNotFound(_) => "file_not_found",
            DownloadError::Process(_) => "process",
            DownloadError::Metadata(_) => "metadata",
        }
    }

    /// Returns the inner message
    pub fn message(&self) -> &str {
        match self {
            DownloadError::YtDlp(msg)
            | DownloadError::FileNotFound(msg)
            | DownloadError::Process(msg)
            | DownloadError::Metadata(msg) => msg,
        }
    }
}
