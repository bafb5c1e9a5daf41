//! yt-dlp stderr analysis
//!
//! Classifies yt-dlp failures for the logs and condenses stderr into the
//! short text that is shown to the user.

/// yt-dlp error kinds
#[derive(Debug, Clone, PartialEq)]
pub enum YtDlpErrorType {
    /// Site refused the request or flagged it as automated
    BotDetection,
    /// Content is private, removed or geo-restricted
    VideoUnavailable,
    /// URL does not belong to any supported extractor
    UnsupportedUrl,
    /// Network problems (timeouts, connection resets)
    NetworkError,
    Unknown,
}

/// Analyzes yt-dlp stderr and determines the error kind
pub fn analyze_ytdlp_error(stderr: &str) -> YtDlpErrorType {
    let stderr_lower = stderr.to_lowercase();

    if stderr_lower.contains("unsupported url") || stderr_lower.contains("is not a valid url") {
        return YtDlpErrorType::UnsupportedUrl;
    }

    if stderr_lower.contains("private video")
        || stderr_lower.contains("video unavailable")
        || stderr_lower.contains("this video is not available")
        || stderr_lower.contains("video has been removed")
        || stderr_lower.contains("not available in your country")
        || stderr_lower.contains("geo restriction")
    {
        return YtDlpErrorType::VideoUnavailable;
    }

    if stderr_lower.contains("sign in to confirm you're not a bot")
        || stderr_lower.contains("http error 403")
        || stderr_lower.contains("http error 429")
    {
        return YtDlpErrorType::BotDetection;
    }

    if stderr_lower.contains("timed out")
        || stderr_lower.contains("connection")
        || stderr_lower.contains("network")
        || stderr_lower.contains("name resolution")
        || stderr_lower.contains("failed to connect")
    {
        return YtDlpErrorType::NetworkError;
    }

    YtDlpErrorType::Unknown
}

/// Reduces yt-dlp stderr to the lines worth showing a user.
///
/// `ERROR:` lines win; otherwise the last non-empty line; otherwise a generic
/// message built from the exit code.
pub fn condense_stderr(stderr: &str, exit_code: Option<i32>) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR:"))
        .collect();

    if !errors.is_empty() {
        return errors.join("\n");
    }

    match stderr.lines().rev().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => line.to_string(),
        None => match exit_code {
            Some(code) => format!("yt-dlp exited with code {}", code),
            None => "yt-dlp was terminated by a signal".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_unavailable() {
        let stderr = "ERROR: [youtube] abc: Private video. Sign in if you've been granted access";
        assert_eq!(analyze_ytdlp_error(stderr), YtDlpErrorType::VideoUnavailable);
    }

    #[test]
    fn test_analyze_unsupported() {
        let stderr = "ERROR: Unsupported URL: https://example.com/page";
        assert_eq!(analyze_ytdlp_error(stderr), YtDlpErrorType::UnsupportedUrl);
    }

    #[test]
    fn test_analyze_bot_detection() {
        let stderr = "ERROR: unable to download video data: HTTP Error 403: Forbidden";
        assert_eq!(analyze_ytdlp_error(stderr), YtDlpErrorType::BotDetection);
    }

    #[test]
    fn test_analyze_network() {
        assert_eq!(
            analyze_ytdlp_error("ERROR: Unable to download webpage: The read operation timed out"),
            YtDlpErrorType::NetworkError
        );
        assert_eq!(analyze_ytdlp_error("something odd"), YtDlpErrorType::Unknown);
    }

    #[test]
    fn test_condense_prefers_error_lines() {
        let stderr = "WARNING: something\nERROR: Video unavailable\n[debug] trailing";
        assert_eq!(condense_stderr(stderr, Some(1)), "ERROR: Video unavailable");
    }

    #[test]
    fn test_condense_falls_back_to_last_line() {
        let stderr = "WARNING: first\nWARNING: second\n\n";
        assert_eq!(condense_stderr(stderr, Some(1)), "WARNING: second");
    }

    #[test]
    fn test_condense_empty_stderr() {
        assert_eq!(condense_stderr("", Some(2)), "yt-dlp exited with code 2");
        assert_eq!(condense_stderr("  \n", None), "yt-dlp was terminated by a signal");
    }
}
