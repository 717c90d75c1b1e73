//! Byte-offset cursor over formula text.
//!
//! The grammar needs a single character of lookahead: a digit, a letter, a
//! parenthesis or a sign always decides which rule applies next.

pub(super) struct Scanner<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `predicate` holds and returns the consumed slice.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.position += ch.len_utf8();
        }
        &self.source[start..self.position]
    }

    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    #[inline]
    pub fn consumed(&self) -> &'a str {
        &self.source[..self.position]
    }

    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
