use crate::parsing::source::LineRef;

use super::kinds::{
    BlockQuote, CodeFence, Heading, IndentedCode, ListItem, ListLine, Table, ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// of its neighbours. Several facts can hold at once (a quote line may also
/// contain a pipe); the builder decides precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Line text without terminator.
    pub text: &'a str,
    /// Whitespace only.
    pub is_blank: bool,
    /// De-indented content if this line opens an indented code block.
    pub indented_code: Option<&'a str>,
    /// Whether the line can continue an open indented code block.
    pub continues_code: bool,
    /// Starts with a backtick fence.
    pub fence: bool,
    pub thematic_break: bool,
    /// `(level, text)` for ATX headings.
    pub heading: Option<(u8, &'a str)>,
    /// Remainder after the `>` prefix.
    pub quote: Option<&'a str>,
    pub has_pipe: bool,
    pub table_delimiter: bool,
    pub list_item: Option<ListLine<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let is_blank = text.trim().is_empty();

        LineClass {
            index: lr.index,
            text,
            is_blank,
            indented_code: IndentedCode::open(text),
            continues_code: is_blank || IndentedCode::is_indented(text),
            fence: CodeFence::is_fence(text),
            thematic_break: ThematicBreak::matches(text),
            heading: Heading::parse(text),
            quote: BlockQuote::strip_prefix(text),
            has_pipe: Table::has_pipe(text),
            table_delimiter: Table::is_delimiter(text),
            list_item: ListItem::parse(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ListKind;

    fn classify(text: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(&LineRef { index: 0, text })
    }

    #[test]
    fn plain_line_has_no_facts() {
        let lc = classify("hello");
        assert!(!lc.is_blank);
        assert!(!lc.fence);
        assert!(!lc.has_pipe);
        assert_eq!(lc.heading, None);
        assert_eq!(lc.quote, None);
        assert_eq!(lc.list_item, None);
        assert_eq!(lc.indented_code, None);
    }

    #[test]
    fn blank_line_continues_code() {
        let lc = classify("   ");
        assert!(lc.is_blank);
        assert!(lc.continues_code);
        assert_eq!(lc.indented_code, None);
    }

    #[test]
    fn indented_list_item_is_list_not_code() {
        let lc = classify("    - nested");
        assert_eq!(lc.indented_code, None);
        assert!(lc.continues_code);
        assert_eq!(
            lc.list_item.map(|l| (l.kind, l.level)),
            Some((ListKind::Bullet, 2))
        );
    }

    #[test]
    fn quote_with_pipe_reports_both() {
        let lc = classify("> a | b");
        assert_eq!(lc.quote, Some("a | b"));
        assert!(lc.has_pipe);
    }

    #[test]
    fn dashes_are_break_and_delimiter_candidates() {
        let lc = classify("---");
        assert!(lc.thematic_break);
        assert!(!lc.table_delimiter);
        assert_eq!(lc.list_item, None);
    }
}
