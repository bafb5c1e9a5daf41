//! User-facing command handlers

use teloxide::types::{ChatId, UserId};

use super::types::{HandlerDeps, HandlerError};
use crate::core::utils::command_args;
use crate::download::downloader::{download_and_send, DownloadOutcome};
use crate::download::source::DownloadMode;
use crate::telegram::texts;

/// /start: remember the sender and greet them.
///
/// The registry holds the sender's private chat, so a /start sent in a group
/// registers the user and never the group.
pub async fn handle_start_command(
    deps: &HandlerDeps,
    chat_id: ChatId,
    sender: Option<UserId>,
) -> Result<(), HandlerError> {
    match sender.map(ChatId::from) {
        Some(user) => {
            if deps.registry.register(user) {
                log::info!("New user registered: {} (total: {})", user, deps.registry.count());
            }
        }
        None => log::warn!("/start without a sender in chat {}, not registering", chat_id),
    }

    deps.messenger.send_markdown(chat_id, &texts::welcome()).await?;
    Ok(())
}

/// /audio, /video or a bare link: run the download flow for the message text.
pub async fn handle_download_command(
    deps: &HandlerDeps,
    chat_id: ChatId,
    text: &str,
    mode: DownloadMode,
) -> Result<DownloadOutcome, HandlerError> {
    let args = command_args(text);
    let outcome = download_and_send(
        deps.messenger.as_ref(),
        deps.source.as_ref(),
        &deps.delivery,
        chat_id,
        &args,
        mode,
    )
    .await?;

    log::debug!("Download request from {} finished: {:?}", chat_id, outcome);
    Ok(outcome)
}
