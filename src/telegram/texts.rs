//! User-facing message texts.
//!
//! Everything returned here is ready-to-send MarkdownV2 unless noted otherwise;
//! dynamic parts are escaped on the way in.

use teloxide::types::ChatId;

use crate::core::utils::escape_markdown_v2;
use crate::download::source::DownloadMode;

/// Plain text.
pub const INVALID_LINK: &str = "❗ Please send a valid YouTube link.";

pub const BROADCAST_DONE: &str = "✅ Broadcast sent successfully\\!";

/// Plain text.
pub const DEFAULT_PHOTO_CAPTION: &str = "📢 New update available! Check it out 🔥";

/// Plain text.
pub const DEFAULT_VIDEO_CAPTION: &str = "🎬 New feature added! Update your bot now ✨";

pub fn welcome() -> String {
    format!(
        "🎧 *{}*\n\n🎵 {}\n➡️ `/audio <youtube_url>`\n\n💫 {}",
        escape_markdown_v2("Welcome to the Premium YouTube Audio Downloader!"),
        escape_markdown_v2("Just send a YouTube link or use this:"),
        escape_markdown_v2("I'll fetch the audio and send it to you in seconds!"),
    )
}

pub fn downloading(mode: DownloadMode) -> String {
    let what = match mode {
        DownloadMode::Audio => "track",
        DownloadMode::Video => "video",
    };
    format!(
        "⬇️ *{}*",
        escape_markdown_v2(&format!("Downloading your {}... Please wait...", what))
    )
}

pub fn download_error(error: &str) -> String {
    format!("❌ *Error:* {}", escape_markdown_v2(error))
}

/// Plain text.
pub fn file_too_large(size_mb: f64) -> String {
    format!("⚠️ File too large ({:.1} MB). Can't send via Telegram.", size_mb)
}

pub fn document_caption(title: &str) -> String {
    format!("✅ *{}*", escape_markdown_v2(title))
}

pub fn admin_panel() -> String {
    format!(
        "🛠️ *Admin Control Panel*\n\n📢 `/broadcast <message>` — {}\n📸 {} `/broadcast` — {}\n📊 `/stats` — {}\n",
        escape_markdown_v2("Send text broadcast"),
        escape_markdown_v2("Send photo/video with caption"),
        escape_markdown_v2("Media broadcast"),
        escape_markdown_v2("View bot stats"),
    )
}

pub fn stats(total_users: usize, admin_id: ChatId) -> String {
    format!(
        "📈 *Bot Statistics:*\n\n👥 Total Users: {}\n🧑‍💻 Admin ID: `{}`",
        total_users, admin_id.0
    )
}

/// Wraps operator text into the promotional broadcast template.
pub fn sponsored(text: &str) -> String {
    format!(
        "🎧 *Sponsored Update*\n\n{}\n\n🔥 Enjoy unlimited music",
        escape_markdown_v2(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_rounds_to_one_decimal() {
        assert_eq!(
            file_too_large(46.04),
            "⚠️ File too large (46.0 MB). Can't send via Telegram."
        );
    }

    #[test]
    fn test_download_error_escapes_text() {
        assert_eq!(
            download_error("ERROR: Video unavailable."),
            "❌ *Error:* ERROR: Video unavailable\\."
        );
    }

    #[test]
    fn test_stats_reports_count_and_admin() {
        let text = stats(3, ChatId(5997715263));
        assert!(text.contains("Total Users: 3"));
        assert!(text.contains("`5997715263`"));
    }

    #[test]
    fn test_sponsored_keeps_operator_text() {
        let text = sponsored("hello");
        assert!(text.contains("Sponsored Update"));
        assert!(text.contains("\n\nhello\n\n"));
        assert!(text.ends_with("Enjoy unlimited music"));
    }

    #[test]
    fn test_sponsored_escapes_punctuation() {
        let text = sponsored("Update v2.0 is out! (new-look)");
        assert!(text.starts_with("🎧 *Sponsored Update*"));
        assert!(text.contains("Update v2\\.0 is out\\! \\(new\\-look\\)"));
    }

    #[test]
    fn test_downloading_mentions_mode() {
        assert!(downloading(DownloadMode::Audio).contains("track"));
        assert!(downloading(DownloadMode::Video).contains("video"));
    }
}
