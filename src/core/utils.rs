//! Text helpers shared by the Telegram handlers

/// Escapes special characters for Telegram's MarkdownV2 format.
///
/// The backslash is escaped first so already-escaped text is not doubled.
///
/// # Example
///
/// ```
/// use audiodrop::core::utils::escape_markdown_v2;
///
/// let escaped = escape_markdown_v2("Hello. World!");
/// assert_eq!(escaped, "Hello\\. World\\!");
/// ```
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.'
            | '!' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Converts a byte count to megabytes (1 MB = 1024 * 1024 bytes).
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Splits a message text into its whitespace-separated arguments,
/// dropping the leading `/command` token when present.
///
/// ```
/// use audiodrop::core::utils::command_args;
///
/// assert_eq!(command_args("/audio https://youtu.be/x"), vec!["https://youtu.be/x"]);
/// assert_eq!(command_args("https://youtu.be/x"), vec!["https://youtu.be/x"]);
/// ```
pub fn command_args(text: &str) -> Vec<&str> {
    let mut parts = text.split_whitespace().peekable();
    if parts.peek().is_some_and(|first| first.starts_with('/')) {
        parts.next();
    }
    parts.collect()
}
