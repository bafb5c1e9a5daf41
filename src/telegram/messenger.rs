//! Outbound messaging port.
//!
//! Handlers talk to Telegram through the `Messenger` trait so the request and
//! broadcast flows can run against a recording implementation in tests.

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile};
use teloxide::RequestError;
use thiserror::Error;

use crate::telegram::markdown::{send_document_markdown_v2, send_message_markdown_v2};

/// Why a single outbound message did not arrive.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Recipient blocked the bot, deactivated the account or never opened a chat
    #[error("recipient unavailable: {0}")]
    Forbidden(String),
    #[error("delivery failed: {0}")]
    Failed(String),
}

impl DeliveryError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, DeliveryError::Forbidden(_))
    }
}

impl From<RequestError> for DeliveryError {
    fn from(err: RequestError) -> Self {
        let err_str = err.to_string();
        let lower = err_str.to_lowercase();
        if lower.contains("forbidden")
            || lower.contains("blocked")
            || lower.contains("deactivated")
            || lower.contains("can't initiate conversation")
        {
            DeliveryError::Forbidden(err_str)
        } else {
            DeliveryError::Failed(err_str)
        }
    }
}

/// Everything the bot ever sends.
///
/// `text` arguments of the `*_markdown` methods and document captions are
/// MarkdownV2; photo and video captions are sent as plain text.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError>;

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError>;

    async fn send_document(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), DeliveryError>;

    async fn send_photo(&self, chat_id: ChatId, photo: &FileId, caption: &str) -> Result<(), DeliveryError>;

    async fn send_video(&self, chat_id: ChatId, video: &FileId, caption: &str) -> Result<(), DeliveryError>;
}

/// `Messenger` backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        send_message_markdown_v2(&self.bot, chat_id, text).await?;
        Ok(())
    }

    async fn send_document(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), DeliveryError> {
        send_document_markdown_v2(&self.bot, chat_id, path, caption).await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: ChatId, photo: &FileId, caption: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_photo(chat_id, InputFile::file_id(photo.clone()))
            .caption(caption)
            .await?;
        Ok(())
    }

    async fn send_video(&self, chat_id: ChatId, video: &FileId, caption: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_video(chat_id, InputFile::file_id(video.clone()))
            .caption(caption)
            .await?;
        Ok(())
    }
}
