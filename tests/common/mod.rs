//! Shared setup for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use audiodrop::download::{DeliverySettings, MediaSource};
use audiodrop::storage::UserRegistry;
use audiodrop::telegram::admin::Operator;
use audiodrop::telegram::HandlerDeps;
use teloxide::types::{ChatId, UserId};

#[path = "../mocks/mod.rs"]
pub mod mocks;

use mocks::RecordingMessenger;

pub const OPERATOR_ID: i64 = 5_997_715_263;
pub const USER_ID: i64 = 42;

pub fn operator_user() -> Option<UserId> {
    Some(UserId(OPERATOR_ID as u64))
}

pub fn regular_user() -> Option<UserId> {
    Some(UserId(USER_ID as u64))
}

pub fn operator() -> Operator {
    Operator::from_raw(OPERATOR_ID)
}

/// Handler dependencies wired to a recording messenger
pub struct TestBot {
    pub messenger: Arc<RecordingMessenger>,
    pub registry: Arc<UserRegistry>,
    pub deps: HandlerDeps,
}

impl TestBot {
    pub fn new(source: Arc<dyn MediaSource>) -> Self {
        Self::with_settings(source, DeliverySettings::default())
    }

    pub fn with_settings(source: Arc<dyn MediaSource>, delivery: DeliverySettings) -> Self {
        let messenger = Arc::new(RecordingMessenger::new());
        let registry = Arc::new(UserRegistry::new());
        let deps = HandlerDeps::new(messenger.clone(), source, registry.clone(), operator(), delivery);
        Self {
            messenger,
            registry,
            deps,
        }
    }

    /// Registers each id as if it had sent /start
    pub fn with_users(self, ids: &[i64]) -> Self {
        for id in ids {
            self.registry.register(ChatId(*id));
        }
        self
    }
}

/// Builds a private-chat message from the operator, merging `content`
/// (e.g. `{"text": ...}` or `{"photo": [...]}`) into the Bot API JSON.
pub fn operator_message(content: serde_json::Value) -> teloxide::types::Message {
    let mut json = serde_json::json!({
        "message_id": 1,
        "date": 1735992000,
        "chat": {
            "id": OPERATOR_ID,
            "type": "private",
            "first_name": "Operator"
        },
        "from": {
            "id": OPERATOR_ID,
            "is_bot": false,
            "first_name": "Operator"
        }
    });
    if let (Some(base), serde_json::Value::Object(extra)) = (json.as_object_mut(), content) {
        base.extend(extra);
    }
    serde_json::from_value(json).unwrap()
}
