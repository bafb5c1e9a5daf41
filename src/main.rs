use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use audiodrop::cli::{Cli, Commands};
use audiodrop::core::utils::bytes_to_mb;
use audiodrop::core::{config, init_logger, log_download_configuration, AppError};
use audiodrop::download::ytdlp::{log_ytdlp_version, print_ytdlp_version};
use audiodrop::download::{DeliverySettings, DownloadMode, DownloadRequest, MediaSource, YtDlpSource};
use audiodrop::storage::UserRegistry;
use audiodrop::telegram::admin::Operator;
use audiodrop::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramMessenger};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, missing token, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // Load .env before any config value is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Fetch { url, video, output }) => run_cli_fetch(url, video, output).await,
        Some(Commands::VersionCheck) => Ok(print_ytdlp_version().await?),
    }
}

async fn run_bot() -> Result<()> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        eprintln!("❌ Please set BOT_TOKEN environment variable.");
        return Err(AppError::Config("BOT_TOKEN is not set".to_string()).into());
    }

    log::info!("Starting bot...");
    log_download_configuration();
    log_ytdlp_version().await;

    std::fs::create_dir_all(&*config::DOWNLOAD_FOLDER)
        .map_err(|e| anyhow::anyhow!("Failed to create download folder {}: {}", *config::DOWNLOAD_FOLDER, e))?;

    let bot = create_bot(token)?;

    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Bot API: {}", e))?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.user.username, me.user.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let deps = HandlerDeps::new(
        Arc::new(TelegramMessenger::new(bot.clone())),
        Arc::new(YtDlpSource::default()),
        Arc::new(UserRegistry::new()),
        Operator::from_raw(*config::admin::ADMIN_USER_ID),
        DeliverySettings::from_config(),
    );

    log::info!("🚀 Bot is live and running");

    Dispatcher::builder(bot, schema(deps))
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error from the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Run the extraction locally and report where the file landed
async fn run_cli_fetch(url: String, video: bool, output: Option<String>) -> Result<()> {
    let output_dir = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&*config::DOWNLOAD_FOLDER));
    std::fs::create_dir_all(&output_dir)?;

    let mode = if video { DownloadMode::Video } else { DownloadMode::Audio };
    let request = DownloadRequest {
        url: url::Url::parse(&url)?,
        mode,
    };

    println!("🎬 Fetching {} ({})", request.url, mode);

    let source = YtDlpSource::new(config::YTDL_BIN.clone(), output_dir);
    let downloaded = source.fetch(&request).await?;
    let size = std::fs::metadata(&downloaded.file_path)?.len();

    println!("✅ {}", downloaded.title);
    println!("📂 {}", downloaded.file_path.display());
    println!("📦 {:.1} MB", bytes_to_mb(size));
    if size > config::download::MAX_FILE_SIZE_BYTES {
        println!(
            "⚠️ Larger than the {} MB upload limit; the bot would refuse to send it",
            config::download::MAX_FILE_SIZE_MB
        );
    }

    Ok(())
}
