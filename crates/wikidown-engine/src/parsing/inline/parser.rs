use super::{cursor::Cursor, kinds::CodeSpan, types::Segment};

/// Splits a line into text and code-span segments.
///
/// An unclosed backtick is ordinary text. Empty text segments are never
/// emitted; an empty code span (a pair of backticks) is.
pub fn split_code_spans(s: &str) -> Vec<Segment<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(code) = try_parse_code_span(&mut cur) {
            if start > text_start {
                out.push(Segment::Text(cur.slice(text_start, start)));
            }
            out.push(code);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if cur.pos() > text_start {
        out.push(Segment::Text(cur.slice(text_start, cur.pos())));
    }
    out
}

/// Attempts to parse a code span at the current position.
///
/// On failure the cursor is left where it was.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<Segment<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Segment::Code(cur.slice(inner_start, inner_end)))
}
