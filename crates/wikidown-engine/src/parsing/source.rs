/// A single source line with its zero-based index.
///
/// `text` never contains the line terminator; a trailing `\r` is dropped too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Splits `text` on `\n` (tolerating `\r\n`), borrowing each line.
///
/// A trailing newline yields a final empty line, so `"a\n"` has two lines.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, line)| LineRef {
        index,
        text: line.strip_suffix('\r').unwrap_or(line),
    })
}
