use std::path::Path;

use crate::core::utils::escape_markdown_v2;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use teloxide::RequestError;

fn is_markdown_parse_error(err: &RequestError) -> bool {
    err.to_string().to_lowercase().contains("can't parse entities")
}

/// Send a MarkdownV2 message and auto-escape on parse errors.
pub async fn send_message_markdown_v2(bot: &Bot, chat_id: ChatId, text: impl Into<String>) -> ResponseResult<Message> {
    let raw_text = text.into();

    match bot
        .send_message(chat_id, raw_text.clone())
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        Ok(msg) => Ok(msg),
        Err(e) if is_markdown_parse_error(&e) => {
            log::warn!("Markdown rejected for chat {}, resending escaped", chat_id);
            bot.send_message(chat_id, escape_markdown_v2(&raw_text))
                .parse_mode(ParseMode::MarkdownV2)
                .await
        }
        Err(e) => Err(e),
    }
}

/// Send a local file as a document with a MarkdownV2 caption, falling back to
/// a plain caption if Telegram rejects the markup.
pub async fn send_document_markdown_v2(
    bot: &Bot,
    chat_id: ChatId,
    path: &Path,
    caption: impl Into<String>,
) -> ResponseResult<Message> {
    let caption = caption.into();

    match bot
        .send_document(chat_id, InputFile::file(path))
        .caption(caption.clone())
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        Ok(msg) => Ok(msg),
        Err(e) if is_markdown_parse_error(&e) => {
            log::warn!("Document caption rejected for chat {}, resending as plain text", chat_id);
            bot.send_document(chat_id, InputFile::file(path)).caption(caption).await
        }
        Err(e) => Err(e),
    }
}
