//! Download-and-deliver request flow.
//!
//! validate URL → acknowledge → extract (blocking pool) → size check →
//! send document → delete local file.

use std::path::Path;

use teloxide::types::ChatId;
use url::Url;

use crate::core::config;
use crate::core::utils::bytes_to_mb;
use crate::download::source::{DownloadMode, DownloadRequest, MediaSource};
use crate::telegram::messenger::{DeliveryError, Messenger};
use crate::telegram::texts;

/// Upload limits applied after extraction.
#[derive(Debug, Clone)]
pub struct DeliverySettings {
    /// Files larger than this are not sent
    pub max_file_size: u64,
    /// Remove files rejected by the size check
    pub delete_oversized: bool,
}

impl DeliverySettings {
    pub fn from_config() -> Self {
        Self {
            max_file_size: config::download::MAX_FILE_SIZE_BYTES,
            delete_oversized: *config::download::DELETE_OVERSIZED_FILES,
        }
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            max_file_size: config::download::MAX_FILE_SIZE_BYTES,
            delete_oversized: false,
        }
    }
}

/// How a request ended. The user has already been told.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    /// No usable URL in the message
    InvalidInput,
    /// The extraction tool failed with this message
    ExtractionFailed(String),
    /// File exceeded the upload limit
    TooLarge { size_bytes: u64 },
    /// Document delivered
    Sent { title: String, size_bytes: u64 },
}

/// Returns the first argument if it is an http(s) URL.
///
/// ```
/// use audiodrop::download::downloader::parse_url_argument;
///
/// assert!(parse_url_argument(&["https://youtu.be/abc"]).is_some());
/// assert!(parse_url_argument(&["hello"]).is_none());
/// assert!(parse_url_argument(&[]).is_none());
/// ```
pub fn parse_url_argument(args: &[&str]) -> Option<Url> {
    let first = args.first()?;
    let url = Url::parse(first).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Handles one download request end to end.
///
/// Errors are returned only when a reply to the requester could not be sent;
/// every other failure is reported to the user and ends in a `DownloadOutcome`.
pub async fn download_and_send(
    messenger: &dyn Messenger,
    source: &dyn MediaSource,
    settings: &DeliverySettings,
    chat_id: ChatId,
    args: &[&str],
    mode: DownloadMode,
) -> Result<DownloadOutcome, DeliveryError> {
    let Some(url) = parse_url_argument(args) else {
        messenger.send_text(chat_id, texts::INVALID_LINK).await?;
        return Ok(DownloadOutcome::InvalidInput);
    };

    messenger.send_markdown(chat_id, &texts::downloading(mode)).await?;

    let request = DownloadRequest { url, mode };
    let output = match source.fetch(&request).await {
        Ok(output) => output,
        Err(e) => {
            log::warn!(
                "{} download via {} for chat {} failed ({}): {}",
                mode,
                source.name(),
                chat_id,
                e.subcategory(),
                e
            );
            messenger.send_markdown(chat_id, &texts::download_error(e.message())).await?;
            return Ok(DownloadOutcome::ExtractionFailed(e.to_string()));
        }
    };

    let size_bytes = match tokio::fs::metadata(&output.file_path).await {
        Ok(meta) => meta.len(),
        Err(e) => {
            let message = format!("Failed to read {}: {}", output.file_path.display(), e);
            log::error!("{}", message);
            messenger.send_markdown(chat_id, &texts::download_error(&message)).await?;
            return Ok(DownloadOutcome::ExtractionFailed(message));
        }
    };

    if size_bytes > settings.max_file_size {
        log::info!(
            "Rejecting {} for chat {}: {:.1} MB over the limit",
            output.file_path.display(),
            chat_id,
            bytes_to_mb(size_bytes)
        );
        if settings.delete_oversized {
            remove_file(&output.file_path).await;
        }
        messenger
            .send_text(chat_id, &texts::file_too_large(bytes_to_mb(size_bytes)))
            .await?;
        return Ok(DownloadOutcome::TooLarge { size_bytes });
    }

    let sent = messenger
        .send_document(chat_id, &output.file_path, &texts::document_caption(&output.title))
        .await;
    remove_file(&output.file_path).await;
    sent?;

    log::info!(
        "Sent \"{}\" ({:.1} MB) to chat {}",
        output.title,
        bytes_to_mb(size_bytes),
        chat_id
    );

    Ok(DownloadOutcome::Sent {
        title: output.title,
        size_bytes,
    })
}

async fn remove_file(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        log::warn!("Failed to delete {}: {}", path.display(), e);
    }
}
