//! Recording messenger
//!
//! Captures every outbound message instead of talking to Telegram, and can be
//! told to fail deliveries to specific chats.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use audiodrop::telegram::{DeliveryError, Messenger};
use teloxide::types::{ChatId, FileId};

/// One captured outbound call
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: ChatId, text: String },
    Markdown { chat_id: ChatId, text: String },
    Document {
        chat_id: ChatId,
        path: PathBuf,
        caption: String,
        /// Whether the file was on disk at send time
        existed: bool,
    },
    Photo { chat_id: ChatId, file_id: FileId, caption: String },
    Video { chat_id: ChatId, file_id: FileId, caption: String },
}

impl Sent {
    pub fn chat_id(&self) -> ChatId {
        match self {
            Sent::Text { chat_id, .. }
            | Sent::Markdown { chat_id, .. }
            | Sent::Document { chat_id, .. }
            | Sent::Photo { chat_id, .. }
            | Sent::Video { chat_id, .. } => *chat_id,
        }
    }

    /// Text or caption of the message
    pub fn body(&self) -> &str {
        match self {
            Sent::Text { text, .. } | Sent::Markdown { text, .. } => text,
            Sent::Document { caption, .. } | Sent::Photo { caption, .. } | Sent::Video { caption, .. } => caption,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Sent::Document { .. })
    }
}

/// How deliveries to a chat should fail
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Blocked,
    Network,
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    attempts: Mutex<Vec<ChatId>>,
    failures: Mutex<HashMap<ChatId, Failure>>,
    fail_documents: AtomicBool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every delivery to `chat_id` fail
    pub fn fail_for(&self, chat_id: ChatId, failure: Failure) {
        self.failures.lock().unwrap().insert(chat_id, failure);
    }

    /// Make every document upload fail while text replies still work
    pub fn fail_documents(&self) {
        self.fail_documents.store(true, Ordering::SeqCst);
    }

    /// Successfully delivered messages, in order
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: ChatId) -> Vec<Sent> {
        self.sent().into_iter().filter(|s| s.chat_id() == chat_id).collect()
    }

    /// Every chat a delivery was attempted to, including failed ones
    pub fn attempts(&self) -> Vec<ChatId> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<Sent> {
        self.sent().into_iter().filter(Sent::is_document).collect()
    }

    fn record(&self, sent: Sent) -> Result<(), DeliveryError> {
        let chat_id = sent.chat_id();
        self.attempts.lock().unwrap().push(chat_id);

        match self.failures.lock().unwrap().get(&chat_id) {
            Some(Failure::Blocked) => {
                return Err(DeliveryError::Forbidden("Forbidden: bot was blocked by the user".to_string()))
            }
            Some(Failure::Network) => return Err(DeliveryError::Failed("connection reset".to_string())),
            None => {}
        }

        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.record(Sent::Text {
            chat_id,
            text: text.to_string(),
        })
    }

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.record(Sent::Markdown {
            chat_id,
            text: text.to_string(),
        })
    }

    async fn send_document(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), DeliveryError> {
        if self.fail_documents.load(Ordering::SeqCst) {
            self.attempts.lock().unwrap().push(chat_id);
            return Err(DeliveryError::Failed("Request Entity Too Large".to_string()));
        }
        self.record(Sent::Document {
            chat_id,
            path: path.to_path_buf(),
            caption: caption.to_string(),
            existed: path.exists(),
        })
    }

    async fn send_photo(&self, chat_id: ChatId, photo: &FileId, caption: &str) -> Result<(), DeliveryError> {
        self.record(Sent::Photo {
            chat_id,
            file_id: photo.clone(),
            caption: caption.to_string(),
        })
    }

    async fn send_video(&self, chat_id: ChatId, video: &FileId, caption: &str) -> Result<(), DeliveryError> {
        self.record(Sent::Video {
            chat_id,
            file_id: video.clone(),
            caption: caption.to_string(),
        })
    }
}
