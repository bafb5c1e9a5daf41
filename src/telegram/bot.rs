//! Bot initialization and command definitions
//!
//! This module contains:
//! - Public command enum definition
//! - Bot instance creation
//! - Command list registration in the Telegram UI

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Public bot commands, as shown in the Telegram command menu.
///
/// Routing matches every command by text prefix (see `is_command`) so that a
/// bare `/audio` still reaches the handler and gets a usage reply. Admin
/// commands (/panel, /stats, /broadcast) are hidden from this list.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "download audio: /audio <url>")]
    Audio(String),
    #[command(description = "download video: /video <url>")]
    Video(String),
}

/// Hidden operator commands, matched by text prefix.
pub mod admin_commands {
    pub const PANEL: &str = "/panel";
    pub const STATS: &str = "/stats";
    pub const BROADCAST: &str = "/broadcast";
}

/// Returns true when `text` invokes `command`, with or without `@botname`.
///
/// ```
/// use audiodrop::telegram::bot::is_command;
///
/// assert!(is_command("/stats", "/stats"));
/// assert!(is_command("/stats@my_bot", "/stats"));
/// assert!(is_command("/broadcast hi", "/broadcast"));
/// assert!(!is_command("/statsx", "/stats"));
/// ```
pub fn is_command(text: &str, command: &str) -> bool {
    let first = text.split_whitespace().next().unwrap_or_default();
    let name = first.split('@').next().unwrap_or_default();
    name == command
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, HTTP client setup)
pub fn create_bot(token: &str) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    let bot = if let Some(bot_api_url) = config::BOT_API_URL.as_deref() {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(token, client).set_api_url(url)
    } else {
        Bot::with_client(token, client)
    };

    Ok(bot)
}

/// Sets up the public bot commands in the Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;

    Ok(())
}
