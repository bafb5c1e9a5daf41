//! Telegram bot integration and handlers

pub mod admin;
pub mod bot;
pub mod handlers;
pub mod markdown;
pub mod messenger;
pub mod texts;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use messenger::{DeliveryError, Messenger, TelegramMessenger};
pub use teloxide::Bot;
