/// A stretch of one inline line after code spans are taken out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary text, still raw markdown.
    Text(&'a str),
    /// Content between a pair of backticks.
    Code(&'a str),
}

/// Inline output under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Source text not yet claimed by any construct. Unescaped.
    Text(String),
    /// HTML produced by the transformer. Never rescanned.
    Markup(String),
}

impl Piece {
    pub fn markup(html: impl Into<String>) -> Self {
        Piece::Markup(html.into())
    }
}
