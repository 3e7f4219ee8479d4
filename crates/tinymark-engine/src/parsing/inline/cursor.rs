/// A cursor for left-to-right inline scanning.
///
/// All delimiters are ASCII, so matching happens on bytes; literal text is
/// consumed a whole `char` at a time so the cursor never splits a UTF-8
/// sequence.
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

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Length of the run of `b` bytes starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.rest().bytes().take_while(|&c| c == b).count()
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes one whole character.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }
}
