use std::sync::OnceLock;

use regex::Regex;

use super::ListItem;

/// Indented code block: lines starting with a tab or four or more spaces.
pub struct IndentedCode;

impl IndentedCode {
    /// Whether the line is indented enough to open or continue a code block.
    pub fn is_indented(line: &str) -> bool {
        static INDENTED: OnceLock<Regex> = OnceLock::new();
        INDENTED
            .get_or_init(|| Regex::new(r"^(?:\t|\s{4,})\S").expect("Invalid indent regex"))
            .is_match(line)
    }

    /// Returns the de-indented content when `line` opens a code block.
    ///
    /// An indented line whose content is a list item, at any depth, is a
    /// nested list item, not code, and yields `None`.
    pub fn open(line: &str) -> Option<&str> {
        if !Self::is_indented(line) || ListItem::parse(line).is_some() {
            return None;
        }
        Some(Self::strip_indent(line))
    }

    /// Removes one tab, or up to four whitespace characters, from a code line.
    pub fn strip_indent(line: &str) -> &str {
        static CODE_INDENT: OnceLock<Regex> = OnceLock::new();
        let end = CODE_INDENT
            .get_or_init(|| Regex::new(r"^(?:\t|\s{0,4})").expect("Invalid indent regex"))
            .find(line)
            .map_or(0, |m| m.end());
        &line[end..]
    }
}
