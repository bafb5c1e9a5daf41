//! Operator-only commands: /panel, /stats and broadcasts.
//!
//! Requests from anyone but the operator are dropped without a reply so the
//! commands stay invisible to regular users.

use teloxide::types::{ChatId, FileId, Message, UserId};

use crate::core::utils::command_args;
use crate::storage::registry::UserRegistry;
use crate::telegram::bot::{admin_commands, is_command};
use crate::telegram::messenger::{DeliveryError, Messenger};
use crate::telegram::texts;

/// Identity of the single privileged user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    id: Option<UserId>,
}

impl Operator {
    /// Operator from a raw Telegram user id; `0` or negative means "no operator".
    pub fn from_raw(id: i64) -> Self {
        let id = u64::try_from(id).ok().filter(|id| *id != 0).map(UserId);
        Self { id }
    }

    pub fn is_operator(&self, user: Option<UserId>) -> bool {
        matches!((self.id, user), (Some(op), Some(user)) if op == user)
    }

    /// Operator id as a chat id, for the stats report
    pub fn chat_id(&self) -> ChatId {
        self.id.map(ChatId::from).unwrap_or(ChatId(0))
    }
}

/// Content the operator wants to push to every user.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastPayload {
    Text(String),
    Photo { file_id: FileId, caption: Option<String> },
    Video { file_id: FileId, caption: Option<String> },
}

impl BroadcastPayload {
    /// Classifies an operator message: photo beats video beats text arguments.
    pub fn from_message(msg: &Message) -> Option<Self> {
        if let Some(sizes) = msg.photo() {
            if let Some(largest) = sizes.last() {
                return Some(BroadcastPayload::Photo {
                    file_id: largest.file.id.clone(),
                    caption: media_caption(msg.caption()),
                });
            }
        }

        if let Some(video) = msg.video() {
            return Some(BroadcastPayload::Video {
                file_id: video.file.id.clone(),
                caption: media_caption(msg.caption()),
            });
        }

        msg.text().and_then(Self::from_text)
    }

    /// Text payload from a `/broadcast <text>` command.
    pub fn from_text(text: &str) -> Option<Self> {
        let args = command_args(text);
        if args.is_empty() {
            None
        } else {
            Some(BroadcastPayload::Text(args.join(" ")))
        }
    }
}

/// Caption for a media broadcast. A leading `/broadcast` trigger is stripped;
/// nothing left means the default caption applies.
fn media_caption(caption: Option<&str>) -> Option<String> {
    let caption = caption?.trim();
    let caption = if is_command(caption, admin_commands::BROADCAST) {
        caption.split_once(char::is_whitespace).map(|(_, rest)| rest.trim()).unwrap_or_default()
    } else {
        caption
    };
    (!caption.is_empty()).then(|| caption.to_string())
}

/// Per-recipient delivery tally, kept for the logs only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub blocked: usize,
    pub failed: usize,
}

/// Replies with the admin help text.
pub async fn handle_panel_command(
    messenger: &dyn Messenger,
    operator: &Operator,
    chat_id: ChatId,
    sender: Option<UserId>,
) -> Result<(), DeliveryError> {
    if !operator.is_operator(sender) {
        return Ok(());
    }
    messenger.send_markdown(chat_id, &texts::admin_panel()).await
}

/// Replies with the registry size and operator id.
pub async fn handle_stats_command(
    messenger: &dyn Messenger,
    operator: &Operator,
    registry: &UserRegistry,
    chat_id: ChatId,
    sender: Option<UserId>,
) -> Result<(), DeliveryError> {
    if !operator.is_operator(sender) {
        return Ok(());
    }
    messenger
        .send_markdown(chat_id, &texts::stats(registry.count(), operator.chat_id()))
        .await
}

/// Sends `payload` to every registered user, then acknowledges to the operator.
///
/// Returns `None` for non-operators (nothing sent). Individual delivery
/// failures never stop the loop and never change the acknowledgement.
pub async fn handle_broadcast(
    messenger: &dyn Messenger,
    operator: &Operator,
    registry: &UserRegistry,
    chat_id: ChatId,
    sender: Option<UserId>,
    payload: Option<BroadcastPayload>,
) -> Result<Option<BroadcastReport>, DeliveryError> {
    if !operator.is_operator(sender) {
        return Ok(None);
    }

    let mut report = BroadcastReport::default();

    if let Some(payload) = payload {
        let recipients = registry.all();
        log::info!("Broadcasting to {} users", recipients.len());

        for user in recipients {
            match deliver(messenger, user, &payload).await {
                Ok(()) => report.delivered += 1,
                Err(e) if e.is_forbidden() => {
                    log::debug!("Broadcast to {} skipped: {}", user, e);
                    report.blocked += 1;
                }
                Err(e) => {
                    log::warn!("Broadcast to {} failed: {}", user, e);
                    report.failed += 1;
                }
            }
        }

        log::info!(
            "Broadcast finished: {} delivered, {} blocked, {} failed",
            report.delivered,
            report.blocked,
            report.failed
        );
    } else {
        log::info!("Broadcast requested without content, nothing to send");
    }

    messenger.send_markdown(chat_id, texts::BROADCAST_DONE).await?;
    Ok(Some(report))
}

async fn deliver(messenger: &dyn Messenger, user: ChatId, payload: &BroadcastPayload) -> Result<(), DeliveryError> {
    match payload {
        BroadcastPayload::Text(text) => messenger.send_markdown(user, &texts::sponsored(text)).await,
        BroadcastPayload::Photo { file_id, caption } => {
            let caption = caption.as_deref().unwrap_or(texts::DEFAULT_PHOTO_CAPTION);
            messenger.send_photo(user, file_id, caption).await
        }
        BroadcastPayload::Video { file_id, caption } => {
            let caption = caption.as_deref().unwrap_or(texts::DEFAULT_VIDEO_CAPTION);
            messenger.send_video(user, file_id, caption).await
        }
    }
}
