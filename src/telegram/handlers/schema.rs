//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_download_command, handle_start_command};
use super::types::{sender_id, HandlerDeps, HandlerError};
use crate::download::source::DownloadMode;
use crate::telegram::admin::{handle_broadcast, handle_panel_command, handle_stats_command, BroadcastPayload};
use crate::telegram::bot::{admin_commands, is_command};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Branch order matters: commands first, then operator media, then bare text.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(start_handler(deps.clone()))
        .branch(download_command_handler(deps.clone(), "/audio", DownloadMode::Audio))
        .branch(download_command_handler(deps.clone(), "/video", DownloadMode::Video))
        // Hidden admin commands (not in Command enum)
        .branch(panel_handler(deps.clone()))
        .branch(stats_handler(deps.clone()))
        .branch(broadcast_command_handler(deps.clone()))
        .branch(media_broadcast_handler(deps.clone()))
        // Bare links are audio requests
        .branch(text_link_handler(deps))
}

fn text_is_command(msg: &Message, command: &str) -> bool {
    msg.text().map(|text| is_command(text, command)).unwrap_or(false)
}

/// Handler for /start
fn start_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| text_is_command(&msg, "/start"))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_start_command(&deps, msg.chat.id, sender_id(&msg)).await {
                    log::error!("/start handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for /audio <url> and /video <url>
fn download_command_handler(
    deps: HandlerDeps,
    command: &'static str,
    mode: DownloadMode,
) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(move |msg: Message| text_is_command(&msg, command))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                if let Err(e) = handle_download_command(&deps, msg.chat.id, text, mode).await {
                    log::error!("{} handler failed for chat {}: {}", command, msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for /panel admin command (hidden, not in Command enum)
fn panel_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| text_is_command(&msg, admin_commands::PANEL))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) =
                    handle_panel_command(deps.messenger.as_ref(), &deps.operator, msg.chat.id, sender_id(&msg)).await
                {
                    log::error!("/panel handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for /stats admin command (hidden, not in Command enum)
fn stats_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| text_is_command(&msg, admin_commands::STATS))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_stats_command(
                    deps.messenger.as_ref(),
                    &deps.operator,
                    &deps.registry,
                    msg.chat.id,
                    sender_id(&msg),
                )
                .await
                {
                    log::error!("/stats handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for /broadcast <text> admin command (hidden, not in Command enum)
fn broadcast_command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| text_is_command(&msg, admin_commands::BROADCAST))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                run_broadcast(&deps, &msg).await;
                Ok(())
            }
        })
}

/// Photos and videos are broadcast when the operator sends them
fn media_broadcast_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.photo().is_some() || msg.video().is_some())
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                run_broadcast(&deps, &msg).await;
                Ok(())
            }
        })
}

async fn run_broadcast(deps: &HandlerDeps, msg: &Message) {
    let result = handle_broadcast(
        deps.messenger.as_ref(),
        &deps.operator,
        &deps.registry,
        msg.chat.id,
        sender_id(msg),
        BroadcastPayload::from_message(msg),
    )
    .await;

    if let Err(e) = result {
        log::error!("/broadcast handler failed for chat {}: {}", msg.chat.id, e);
    }
}

/// Any non-command text is treated as an audio request
fn text_link_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                if let Err(e) = handle_download_command(&deps, msg.chat.id, text, DownloadMode::Audio).await {
                    log::error!("Link handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}
