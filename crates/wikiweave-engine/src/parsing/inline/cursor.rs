/// A cursor over an inline fragment.
///
/// Delimiters are ASCII, so byte-level `starts_with` checks never match in
/// the middle of a multi-byte character; plain text is stepped over one
/// `char` at a time to keep the index on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The fragment being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// The character before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.s[..self.i.min(self.s.len())].chars().next_back()
    }

    /// Advances past one full character.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes; `n` must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Finds `pat` after the cursor and returns the text before it,
    /// advancing past `pat`. Leaves the cursor untouched when not found.
    pub fn take_until(&mut self, pat: &str) -> Option<&'a str> {
        let rest = self.rest();
        let at = rest.find(pat)?;
        self.i += at + pat.len();
        Some(&rest[..at])
    }
}
