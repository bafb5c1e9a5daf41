//! audiodrop - Telegram bot that turns video links into audio files
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and shared helpers
//! - `storage`: the in-memory user registry
//! - `download`: yt-dlp extraction and the download-and-deliver flow
//! - `telegram`: bot setup, dispatcher schema and operator commands

pub mod cli;
pub mod core;
pub mod download;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError};
pub use download::{download_and_send, DownloadMode, MediaSource, YtDlpSource};
pub use storage::UserRegistry;
pub use telegram::{schema, HandlerDeps, Messenger};
