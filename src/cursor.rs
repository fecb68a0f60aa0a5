use std::str::Chars;

/// Character reader over a source buffer.
///
/// Positions are byte offsets into the source, but every read works on whole
/// `char`s, so slicing at an offset returned by the cursor is always valid.
/// Reads past the end yield `None` instead of panicking.
pub struct Cursor<'src> {
    source: &'src str,
    chars: Chars<'src>,
    /// Byte offset of the next unread character.
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.chars(),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_end(&self) -> bool {
        self.offset == self.source.len()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next_char(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character only if it is `expected`.
    pub fn match_next(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            let _ = self.next_char();
            true
        } else {
            false
        }
    }

    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }
            let _ = self.next_char();
        }
    }

    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset]
    }
}
