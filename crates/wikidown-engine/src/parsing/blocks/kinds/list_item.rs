/// Bullet (`-`) or ordered (`1.`) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// HTML element name for a list of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A classified list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub kind: ListKind,
    /// Nesting level: indentation width (tabs count as two) halved.
    pub level: usize,
    /// Item content, trimmed.
    pub text: &'a str,
}

/// List item syntax: optional indentation, then `-` or `<digits>.`, then whitespace.
pub struct ListItem;

impl ListItem {
    pub const BULLET: char = '-';
    pub const ORDERED_SUFFIX: char = '.';
    /// Columns a tab counts for when computing the nesting level.
    pub const TAB_WIDTH: usize = 2;
    /// Columns per nesting level.
    pub const LEVEL_WIDTH: usize = 2;

    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let rest = line.trim_start();
        let leading = &line[..line.len() - rest.len()];
        let (kind, after) = Self::marker(rest)?;

        let width: usize = leading
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();

        Some(ListLine {
            kind,
            level: width / Self::LEVEL_WIDTH,
            text: after.trim(),
        })
    }

    /// Splits a marker off the front of `s`, requiring whitespace after it.
    fn marker(s: &str) -> Option<(ListKind, &str)> {
        let (kind, after) = if let Some(after) = s.strip_prefix(Self::BULLET) {
            (ListKind::Bullet, after)
        } else {
            let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return None;
            }
            let after = s[digits..].strip_prefix(Self::ORDERED_SUFFIX)?;
            (ListKind::Ordered, after)
        };
        after
            .starts_with(char::is_whitespace)
            .then_some((kind, after))
    }
}
