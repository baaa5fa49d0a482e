use super::kinds::ListKind;

/// One block-level event produced by the scanner.
///
/// Text borrows from the source and is still raw markdown: inline
/// transformation and escaping happen when the event is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent<'a> {
    /// `#`..`######` heading with its trimmed text.
    Heading { level: u8, text: &'a str },
    /// One non-blank line that matched nothing else, trimmed.
    Paragraph(&'a str),
    /// Fenced or indented code, one entry per line, already de-indented.
    Code(Vec<&'a str>),
    /// Opens a nested list context.
    ListStart(ListKind),
    /// A list item's trimmed content.
    ListItem(&'a str),
    /// Closes the innermost list context.
    ListEnd(ListKind),
    /// Pipe table; every body row has exactly as many cells as the header.
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
    },
    /// Consecutive quote lines, prefixes stripped.
    BlockQuote(Vec<&'a str>),
    ThematicBreak,
    /// A blank line, kept as a spacer.
    Gap,
}
