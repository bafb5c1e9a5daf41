//! Configuration constants for the bot

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Defaults to ./downloads; supports tilde (~) expansion for home directory
pub static DOWNLOAD_FOLDER: Lazy<String> = Lazy::new(|| {
    let raw = env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "./downloads".to_string());
    shellexpand::tilde(&raw).to_string()
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (local telegram-bot-api instance)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| {
    env::var("BOT_API_URL").ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
});

/// Download configuration
pub mod download {
    use once_cell::sync::Lazy;
    use std::env;

    /// Largest file the bot will try to upload (45 MB, below the Bot API 50 MB cap)
    pub const MAX_FILE_SIZE_MB: u64 = 45;

    /// Same limit in bytes
    pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

    /// Whether files rejected by the size check are removed from disk
    /// Read from DELETE_OVERSIZED_FILES environment variable
    /// Default: false (oversized files stay in DOWNLOAD_FOLDER)
    pub static DELETE_OVERSIZED_FILES: Lazy<bool> = Lazy::new(|| {
        env::var("DELETE_OVERSIZED_FILES")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    });
}

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// Operator user ID for hidden admin commands (/panel, /stats, /broadcast)
    /// Read from ADMIN_USER_ID environment variable
    /// Defaults to 0 if not set (nobody is the operator)
    pub static ADMIN_USER_ID: Lazy<i64> = Lazy::new(|| {
        env::var("ADMIN_USER_ID")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    });
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Document uploads of up to 45 MB need a generous budget
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// yt-dlp invocation configuration
pub mod ytdlp {
    use super::Duration;

    /// Timeout for the startup `--version` probe (in seconds)
    pub const VERSION_TIMEOUT_SECS: u64 = 15;

    pub fn version_timeout() -> Duration {
        Duration::from_secs(VERSION_TIMEOUT_SECS)
    }
}
