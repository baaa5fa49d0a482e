use std::sync::OnceLock;

use regex::Regex;

/// Bare `http://` / `https://` URL.
pub struct Autolink;

impl Autolink {
    /// Punctuation that ends a sentence rather than the URL.
    pub const TRAILING: &'static [char] = &['.', ',', ':', ';', '!', '?', ')', ']', '}'];

    pub fn pattern() -> &'static Regex {
        static AUTOLINK: OnceLock<Regex> = OnceLock::new();
        AUTOLINK.get_or_init(|| Regex::new(r"https?://[^\s<>]+").expect("Invalid autolink regex"))
    }

    /// Splits trailing punctuation off a matched URL.
    pub fn split_trailing(url: &str) -> (&str, &str) {
        let trimmed = url.trim_end_matches(Self::TRAILING);
        (trimmed, &url[trimmed.len()..])
    }
}
