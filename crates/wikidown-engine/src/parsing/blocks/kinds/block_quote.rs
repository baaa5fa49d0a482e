/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single level: `> > x` is a quote line whose content is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix from a line, returning the remainder.
    ///
    /// Leading whitespace before `>` is allowed, and one whitespace character
    /// after it is consumed. Returns `None` when the line is not a quote.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        let rest = s.trim_start().strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }
}
