//! Forward-only character cursor shared by the CSS and JavaScript scanners.
//!
//! Positions are byte offsets into the source so slices can be taken without
//! allocating, while every count the cursor reports is in `char`s.

/// Result of consuming a delimited literal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Delimited {
    /// Characters consumed, closing delimiter included when found
    pub chars: usize,
    /// Whether the closing delimiter was reached before end of input
    pub closed: bool,
}

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the next two characters if they are `first` followed by `second`.
    pub(crate) fn eat_pair(&mut self, first: char, second: char) -> bool {
        if self.peek() == Some(first) && self.peek_second() == Some(second) {
            self.pos += first.len_utf8() + second.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes a literal body whose opening delimiter was already consumed.
    ///
    /// A backslash escapes the following character, which then can never close
    /// the literal. A backslash at end of input is consumed on its own.
    pub(crate) fn consume_delimited(&mut self, close: char) -> Delimited {
        let mut chars = 0;
        while let Some(c) = self.bump() {
            chars += 1;
            if c == '\\' {
                if self.bump().is_some() {
                    chars += 1;
                }
            } else if c == close {
                return Delimited { chars, closed: true };
            }
        }
        Delimited {
            chars,
            closed: false,
        }
    }

    /// Advances past the next occurrence of `terminator`.
    ///
    /// Returns the number of characters consumed including the terminator, or
    /// `None` (with the cursor at end of input) when it never occurs.
    pub(crate) fn skip_past(&mut self, terminator: &str) -> Option<usize> {
        let rest = self.rest();
        match rest.find(terminator) {
            Some(offset) => {
                let end = offset + terminator.len();
                self.pos += end;
                Some(rest[..end].chars().count())
            }
            None => {
                self.pos = self.text.len();
                None
            }
        }
    }

    /// Advances past the first character matching `is_terminator`.
    ///
    /// Same contract as [`Cursor::skip_past`] for a single-character terminator.
    pub(crate) fn skip_past_char(&mut self, is_terminator: impl Fn(char) -> bool) -> Option<usize> {
        let rest = self.rest();
        match rest.char_indices().find(|&(_, c)| is_terminator(c)) {
            Some((offset, c)) => {
                let end = offset + c.len_utf8();
                self.pos += end;
                Some(rest[..end].chars().count())
            }
            None => {
                self.pos = self.text.len();
                None
            }
        }
    }

    /// Consumes characters while `predicate` holds, returning how many were taken.
    pub(crate) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut chars = 0;
        while self.peek().is_some_and(&predicate) {
            self.bump();
            chars += 1;
        }
        chars
    }
}
