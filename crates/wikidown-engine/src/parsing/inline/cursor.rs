/// Byte cursor over one line of inline content.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `b` is under the cursor or input ends.
    pub fn bump_until(&mut self, b: u8) {
        while !self.eof() && self.peek() != Some(b) {
            self.i += 1;
        }
    }

    /// Text between two byte positions.
    ///
    /// Positions must sit on char boundaries; every delimiter this cursor
    /// stops on is ASCII, so positions taken at delimiters always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
