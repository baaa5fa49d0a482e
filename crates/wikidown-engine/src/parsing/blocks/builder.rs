use super::{
    classify::LineClass, kinds::IndentedCode, kinds::Table, list_stack::ListStack,
    types::BlockEvent,
};

/// Multi-line construct currently being collected.
#[derive(Debug)]
enum LeafState<'a> {
    None,
    /// Inside a backtick fence; lines are raw.
    Fence { opened_at: usize, lines: Vec<&'a str> },
    IndentedCode { lines: Vec<&'a str> },
    Quote { lines: Vec<&'a str> },
    /// A line with a pipe that becomes a table header if the next line is a
    /// delimiter row.
    TableHeader { line: LineClass<'a> },
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
    },
}

/// Block state machine: consumes classified lines, emits [`BlockEvent`]s.
///
/// Precedence for a line that does not continue the current construct:
/// indented code, fence, thematic break, heading, quote, table header, list
/// item, blank, paragraph. Any block other than a list item closes all open
/// lists.
pub struct BlockBuilder<'a> {
    lists: ListStack,
    leaf: LeafState<'a>,
    out: Vec<BlockEvent<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            lists: ListStack::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Fence {
                opened_at,
                mut lines,
            } => {
                if c.fence {
                    self.out.push(BlockEvent::Code(lines));
                } else {
                    lines.push(c.text);
                    self.leaf = LeafState::Fence { opened_at, lines };
                }
                return;
            }
            LeafState::IndentedCode { mut lines } => {
                if c.continues_code {
                    lines.push(IndentedCode::strip_indent(c.text));
                    self.leaf = LeafState::IndentedCode { lines };
                    return;
                }
                self.out.push(BlockEvent::Code(lines));
            }
            LeafState::Quote { mut lines } => {
                if let Some(rest) = c.quote {
                    lines.push(rest);
                    self.leaf = LeafState::Quote { lines };
                    return;
                }
                self.out.push(BlockEvent::BlockQuote(lines));
            }
            LeafState::Table { header, mut rows } => {
                if c.has_pipe && !c.is_blank {
                    rows.push(Table::body_cells(c.text, header.len()));
                    self.leaf = LeafState::Table { header, rows };
                    return;
                }
                self.out.push(BlockEvent::Table { header, rows });
            }
            LeafState::TableHeader { line } => {
                if c.table_delimiter {
                    self.lists.close_all(&mut self.out);
                    self.leaf = LeafState::Table {
                        header: Table::split_cells(line.text),
                        rows: vec![],
                    };
                    return;
                }
                self.push_simple(&line);
            }
        }

        self.open(c);
    }

    pub fn finish(mut self) -> Vec<BlockEvent<'a>> {
        // EOF flush
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Fence { opened_at, lines } => {
                log::debug!("code fence opened on line {} was never closed", opened_at + 1);
                self.out.push(BlockEvent::Code(lines));
            }
            LeafState::IndentedCode { lines } => self.out.push(BlockEvent::Code(lines)),
            LeafState::Quote { lines } => self.out.push(BlockEvent::BlockQuote(lines)),
            LeafState::Table { header, rows } => {
                self.out.push(BlockEvent::Table { header, rows });
            }
            LeafState::TableHeader { line } => self.push_simple(&line),
        }
        self.lists.close_all(&mut self.out);
        self.out
    }

    /// Starts whatever block `c` opens.
    fn open(&mut self, c: LineClass<'a>) {
        if let Some(code) = c.indented_code {
            self.lists.close_all(&mut self.out);
            self.leaf = LeafState::IndentedCode { lines: vec![code] };
            return;
        }
        if c.fence {
            self.lists.close_all(&mut self.out);
            self.leaf = LeafState::Fence {
                opened_at: c.index,
                lines: vec![],
            };
            return;
        }
        if c.thematic_break {
            self.lists.close_all(&mut self.out);
            self.out.push(BlockEvent::ThematicBreak);
            return;
        }
        if let Some((level, text)) = c.heading {
            self.lists.close_all(&mut self.out);
            self.out.push(BlockEvent::Heading { level, text });
            return;
        }
        if let Some(rest) = c.quote {
            self.lists.close_all(&mut self.out);
            self.leaf = LeafState::Quote { lines: vec![rest] };
            return;
        }
        if c.has_pipe {
            // Lists stay open until the delimiter row confirms a table.
            self.leaf = LeafState::TableHeader { line: c };
            return;
        }
        self.push_simple(&c);
    }

    /// Single-line blocks that need no lookahead: list item, blank, paragraph.
    fn push_simple(&mut self, c: &LineClass<'a>) {
        if let Some(item) = c.list_item {
            self.lists.enter(item.kind, item.level, &mut self.out);
            self.out.push(BlockEvent::ListItem(item.text));
            return;
        }

        self.lists.close_all(&mut self.out);
        if c.is_blank {
            self.out.push(BlockEvent::Gap);
        } else {
            self.out.push(BlockEvent::Paragraph(c.text.trim()));
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::parsing::blocks::{BlockEvent, kinds::ListKind};
    use crate::parsing::scan_blocks;

    use BlockEvent::*;
    use ListKind::{Bullet, Ordered};

    #[test]
    fn paragraphs_are_one_per_line() {
        assert_eq!(
            scan_blocks("hello\n  world  "),
            vec![Paragraph("hello"), Paragraph("world")]
        );
    }

    #[test]
    fn blank_lines_become_gaps() {
        assert_eq!(scan_blocks("a\n\nb"), vec![Paragraph("a"), Gap, Paragraph("b")]);
    }

    #[test]
    fn heading_closes_list() {
        assert_eq!(
            scan_blocks("- a\n# T"),
            vec![
                ListStart(Bullet),
                ListItem("a"),
                ListEnd(Bullet),
                Heading {
                    level: 1,
                    text: "T"
                },
            ]
        );
    }

    #[test]
    fn nested_list_closes_before_next_top_level_item() {
        assert_eq!(
            scan_blocks("- a\n  - b\n- c"),
            vec![
                ListStart(Bullet),
                ListItem("a"),
                ListStart(Bullet),
                ListItem("b"),
                ListEnd(Bullet),
                ListItem("c"),
                ListEnd(Bullet),
            ]
        );
    }

    #[test]
    fn mixed_kinds_at_same_level_reopen_list() {
        assert_eq!(
            scan_blocks("- a\n1. b"),
            vec![
                ListStart(Bullet),
                ListItem("a"),
                ListEnd(Bullet),
                ListStart(Ordered),
                ListItem("b"),
                ListEnd(Ordered),
            ]
        );
    }

    #[test]
    fn fence_is_a_raw_zone() {
        assert_eq!(
            scan_blocks("```\n# not heading\n    - not list\n```\nafter"),
            vec![
                Code(vec!["# not heading", "    - not list"]),
                Paragraph("after"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_closes_at_eof() {
        assert_eq!(
            scan_blocks("```rust\nfn main() {}"),
            vec![Code(vec!["fn main() {}"])]
        );
    }

    #[test]
    fn indented_code_swallows_blank_and_indented_lines() {
        assert_eq!(
            scan_blocks("    a\n\n\tb\nc"),
            vec![Code(vec!["a", "", "b"]), Paragraph("c")]
        );
    }

    #[test]
    fn quote_lines_group_until_non_quote() {
        assert_eq!(
            scan_blocks("> one\n>two\nthree"),
            vec![BlockQuote(vec!["one", "two"]), Paragraph("three")]
        );
    }

    #[test]
    fn table_needs_delimiter_row() {
        assert_eq!(
            scan_blocks("A | B\n---|---\n1 | 2\n\nx"),
            vec![
                Table {
                    header: vec!["A", "B"],
                    rows: vec![vec!["1", "2"]],
                },
                Gap,
                Paragraph("x"),
            ]
        );
    }

    #[test]
    fn pipe_line_without_delimiter_is_paragraph() {
        assert_eq!(
            scan_blocks("a | b\nplain"),
            vec![Paragraph("a | b"), Paragraph("plain")]
        );
    }

    #[test]
    fn pipe_list_item_without_delimiter_stays_in_list() {
        assert_eq!(
            scan_blocks("- a | b\n- c"),
            vec![
                ListStart(Bullet),
                ListItem("a | b"),
                ListItem("c"),
                ListEnd(Bullet),
            ]
        );
    }

    #[test]
    fn table_closes_open_list() {
        assert_eq!(
            scan_blocks("- a\nA | B\n--|--"),
            vec![
                ListStart(Bullet),
                ListItem("a"),
                ListEnd(Bullet),
                Table {
                    header: vec!["A", "B"],
                    rows: vec![],
                },
            ]
        );
    }

    #[test]
    fn pending_table_header_flushes_at_eof() {
        assert_eq!(scan_blocks("a | b"), vec![Paragraph("a | b")]);
    }

    #[test]
    fn thematic_break_beats_list() {
        assert_eq!(
            scan_blocks("- a\n- - -"),
            vec![
                ListStart(Bullet),
                ListItem("a"),
                ListEnd(Bullet),
                ThematicBreak,
            ]
        );
    }

    #[test]
    fn deep_indentation_pushes_every_level() {
        let events = scan_blocks("      - deep");
        assert_eq!(
            events,
            vec![
                ListStart(Bullet),
                ListStart(Bullet),
                ListStart(Bullet),
                ListStart(Bullet),
                ListItem("deep"),
                ListEnd(Bullet),
                ListEnd(Bullet),
                ListEnd(Bullet),
                ListEnd(Bullet),
            ]
        );
    }
}
