//! Telegram bot handler tree configuration
//!
//! The dispatcher schema only unpacks updates; the work happens in
//! `commands` and `telegram::admin`, which tests call directly.

mod commands;
mod schema;
mod types;

pub use commands::{handle_download_command, handle_start_command};
pub use schema::schema;
pub use types::{sender_id, HandlerDeps, HandlerError};
