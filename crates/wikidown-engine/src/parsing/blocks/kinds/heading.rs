/// ATX heading: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, trimmed text)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        // `#` is one byte, so `hashes` is also a byte offset
        let rest = &line[hashes..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let level = u8::try_from(hashes).ok()?;
        Some((level, rest.trim()))
    }
}
