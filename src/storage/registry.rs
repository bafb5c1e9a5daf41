//! In-memory registry of users who have sent `/start`.
//!
//! Lives from process start to process end; nothing is persisted.

use dashmap::DashSet;
use teloxide::types::ChatId;

/// Set of known user chats.
///
/// Shared behind an `Arc` by every handler; `DashSet` keeps concurrent
/// handlers from different chats safe without an outer lock.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: DashSet<ChatId>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user. Returns `true` if the user was not known before.
    pub fn register(&self, id: ChatId) -> bool {
        self.users.insert(id)
    }

    /// Snapshot of every registered user, in no particular order.
    pub fn all(&self) -> Vec<ChatId> {
        self.users.iter().map(|entry| *entry.key()).collect()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn contains(&self, id: ChatId) -> bool {
        self.users.contains(&id)
    }
}
