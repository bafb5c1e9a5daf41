//! Extraction backend powered by yt-dlp.
//!
//! Runs one yt-dlp process per request on tokio's blocking pool and reads the
//! info JSON it prints to learn where the file landed.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config;
use crate::download::error::DownloadError;
use crate::download::source::{DownloadOutput, DownloadRequest, MediaSource};
use crate::download::ytdlp_errors::{analyze_ytdlp_error, condense_stderr};

/// Fields of the yt-dlp info JSON this backend relies on.
#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default, rename = "_filename")]
    legacy_filename: Option<String>,
}

/// Download source powered by yt-dlp for extracting media from supported sites.
pub struct YtDlpSource {
    ytdl_bin: String,
    download_dir: PathBuf,
}

impl Default for YtDlpSource {
    fn default() -> Self {
        Self::new(config::YTDL_BIN.clone(), PathBuf::from(&*config::DOWNLOAD_FOLDER))
    }
}

impl YtDlpSource {
    pub fn new(ytdl_bin: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            ytdl_bin: ytdl_bin.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Output template: `<download dir>/<media id>.<ext>`
    fn output_template(&self) -> String {
        self.download_dir.join("%(id)s.%(ext)s").to_string_lossy().into_owned()
    }

    /// Full argument list for one download.
    fn build_args(&self, request: &DownloadRequest) -> Vec<String> {
        vec![
            "--no-playlist".to_string(),
            "--playlist-items".to_string(),
            "1".to_string(),
            "--format".to_string(),
            request.mode.format_selector().to_string(),
            "--output".to_string(),
            self.output_template(),
            "--dump-json".to_string(),
            "--no-simulate".to_string(),
            "--no-progress".to_string(),
            "--no-warnings".to_string(),
            request.url.to_string(),
        ]
    }
}

#[async_trait]
impl MediaSource for YtDlpSource {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn fetch(&self, request: &DownloadRequest) -> Result<DownloadOutput, DownloadError> {
        let ytdl_bin = self.ytdl_bin.clone();
        let args = self.build_args(request);
        let download_dir = self.download_dir.clone();

        log::info!("Starting yt-dlp ({}) for {}", request.mode, request.url);

        let handle = tokio::task::spawn_blocking(move || {
            let output = Command::new(&ytdl_bin)
                .args(&args)
                .stdin(Stdio::null())
                .output()
                .map_err(|e| DownloadError::Process(format!("Failed to run {}: {}", ytdl_bin, e)))?;
            finish_download(&output, &download_dir)
        });

        handle
            .await
            .map_err(|e| DownloadError::Process(format!("yt-dlp task failed: {}", e)))?
    }
}

/// Interprets a finished yt-dlp process.
fn finish_download(output: &Output, download_dir: &Path) -> Result<DownloadOutput, DownloadError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!(
            "yt-dlp failed (exit code: {:?}, kind: {:?})",
            output.status.code(),
            analyze_ytdlp_error(&stderr)
        );
        return Err(DownloadError::YtDlp(condense_stderr(&stderr, output.status.code())));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let info = parse_info_json(&stdout)?;
    let file_path = resolve_downloaded_file(&info, download_dir)?;
    let title = info.title.clone().unwrap_or_else(|| info.id.clone());

    Ok(DownloadOutput { file_path, title })
}

/// Parses the info JSON printed by `--dump-json`. Only the first JSON line is
/// used; it describes the file this run wrote.
fn parse_info_json(stdout: &str) -> Result<YtDlpInfo, DownloadError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| DownloadError::Metadata("yt-dlp printed no media information".to_string()))?;

    serde_json::from_str(line).map_err(|e| DownloadError::Metadata(format!("Failed to parse yt-dlp output: {}", e)))
}

/// Finds the file yt-dlp wrote.
///
/// Tries the filename yt-dlp reported, then `<id>.<ext>`, then any file in the
/// download directory named `<id>.*`.
fn resolve_downloaded_file(info: &YtDlpInfo, download_dir: &Path) -> Result<PathBuf, DownloadError> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(name) = info.filename.as_ref().or(info.legacy_filename.as_ref()) {
        candidates.push(PathBuf::from(name));
    }
    if let Some(ext) = &info.ext {
        candidates.push(download_dir.join(format!("{}.{}", info.id, ext)));
    }

    if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
        return Ok(found);
    }

    log::warn!("Expected output for {} not found, scanning {}", info.id, download_dir.display());

    let prefix = format!("{}.", info.id);
    let entries = std::fs::read_dir(download_dir)
        .map_err(|e| DownloadError::FileNotFound(format!("Failed to read downloads dir: {}", e)))?;

    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().starts_with(&prefix))
                .unwrap_or(false)
        })
        .filter(|path| !path.extension().is_some_and(|ext| ext == "part" || ext == "ytdl"))
        .last()
        .ok_or_else(|| DownloadError::FileNotFound(format!("Downloaded file for {} not found", info.id)))
}
