//! The renderer's only sanitisation boundary.
//!
//! Every piece of document text that reaches the output goes through
//! [`escape_html`]; every `href`/`src` goes through [`safe_url`].

use std::borrow::Cow;

const SCRIPT_SCHEME: &str = "javascript:";

/// Replacement for URLs that must not be emitted.
pub const BLOCKED_URL: &str = "#";

/// Escapes `&`, `<`, `>`, `"` and `'` so the value is safe as element text
/// and inside a quoted attribute.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

/// Escapes a URL for an `href`/`src` attribute, replacing script URLs with `#`.
///
/// The scheme check ignores case and any whitespace or control characters
/// browsers would skip over (`java\tscript:`).
pub fn safe_url(url: &str) -> Cow<'_, str> {
    if is_script_url(url) {
        return Cow::Borrowed(BLOCKED_URL);
    }
    escape_html(url)
}

fn is_script_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(SCRIPT_SCHEME.len())
        .collect();
    compact.eq_ignore_ascii_case(SCRIPT_SCHEME)
}
