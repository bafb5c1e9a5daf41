use tokio::process::Command;

use crate::core::config;
use crate::core::error::AppError;
use crate::core::process::run_with_timeout;

/// Returns the installed yt-dlp version string.
///
/// # Errors
///
/// Fails when the binary cannot be started, times out or exits non-zero.
pub async fn ytdlp_version(ytdl_bin: &str) -> Result<String, AppError> {
    let output = run_with_timeout(Command::new(ytdl_bin).arg("--version"), config::ytdlp::version_timeout()).await?;

    if !output.status.success() {
        return Err(AppError::Validation(format!(
            "{} --version exited with {:?}",
            ytdl_bin,
            output.status.code()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Logs the yt-dlp version at startup. A missing binary is only a warning:
/// every download will then fail with a readable error instead.
pub async fn log_ytdlp_version() {
    let ytdl_bin = &*config::YTDL_BIN;

    match ytdlp_version(ytdl_bin).await {
        Ok(version) => log::info!("Current yt-dlp version: {}", version),
        Err(e) => log::warn!("Failed to get yt-dlp version from {}: {}. Continuing anyway.", ytdl_bin, e),
    }
}

/// Prints the yt-dlp version (CLI `version-check`).
pub async fn print_ytdlp_version() -> Result<(), AppError> {
    let version = ytdlp_version(&config::YTDL_BIN).await?;
    println!("yt-dlp version: {}", version);
    Ok(())
}
