//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::{Message, UserId};

use crate::download::downloader::DeliverySettings;
use crate::download::source::MediaSource;
use crate::storage::registry::UserRegistry;
use crate::telegram::admin::Operator;
use crate::telegram::messenger::Messenger;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub messenger: Arc<dyn Messenger>,
    pub source: Arc<dyn MediaSource>,
    pub registry: Arc<UserRegistry>,
    pub operator: Operator,
    pub delivery: DeliverySettings,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(
        messenger: Arc<dyn Messenger>,
        source: Arc<dyn MediaSource>,
        registry: Arc<UserRegistry>,
        operator: Operator,
        delivery: DeliverySettings,
    ) -> Self {
        Self {
            messenger,
            source,
            registry,
            operator,
            delivery,
        }
    }
}

/// Sender of a message, if Telegram reported one
pub fn sender_id(msg: &Message) -> Option<UserId> {
    msg.from.as_ref().map(|u| u.id)
}
