//! JavaScript estimator
//!
//! Strips line comments, block comments and all whitespace. String literals,
//! template spans and regex literals are kept verbatim. A `/` in code is read
//! as division or as the start of a regex depending on the last significant
//! token seen.

use super::cursor::Cursor;
use super::Quote;

/// Keywords after which an expression is expected, so a following `/` starts
/// a regex literal rather than a division.
const VALUE_EXPECTING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsMode {
    Normal,
    LineComment,
    BlockComment,
    String(Quote),
    TemplateSpan,
    RegexLiteral,
}

/// Class of the last meaningful token emitted in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastSignificant {
    /// Nothing emitted yet
    Start,
    /// Identifier, number, closing `)`/`]`, or a completed literal
    Value,
    /// Keyword that expects an operand next
    Keyword,
    /// Any other punctuator or operator
    Punctuator,
}

impl LastSignificant {
    fn ends_value(self) -> bool {
        self == LastSignificant::Value
    }
}

struct JsScanner<'a> {
    cursor: Cursor<'a>,
    mode: JsMode,
    kept: usize,
    last: LastSignificant,
    /// Byte offset where the identifier-like word being scanned started
    word_start: Option<usize>,
}

impl<'a> JsScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            mode: JsMode::Normal,
            kept: 0,
            last: LastSignificant::Start,
            word_start: None,
        }
    }

    fn run(mut self) -> usize {
        loop {
            let more = match self.mode {
                JsMode::Normal => self.scan_normal(),
                JsMode::LineComment => self.scan_line_comment(),
                JsMode::BlockComment => self.scan_block_comment(),
                JsMode::String(quote) => self.scan_literal(quote.as_char()),
                JsMode::TemplateSpan => self.scan_literal('`'),
                JsMode::RegexLiteral => self.scan_regex(),
            };
            if !more {
                return self.kept;
            }
        }
    }

    /// Handles one step of code. Returns `false` at end of input.
    fn scan_normal(&mut self) -> bool {
        let Some(c) = self.cursor.peek() else {
            return false;
        };

        if is_identifier_char(c) {
            if self.word_start.is_none() {
                self.word_start = Some(self.cursor.pos());
            }
            self.cursor.bump();
            self.kept += 1;
            return true;
        }
        self.finish_word();

        if self.cursor.eat_pair('/', '/') {
            self.mode = JsMode::LineComment;
            return true;
        }
        if self.cursor.eat_pair('/', '*') {
            self.mode = JsMode::BlockComment;
            return true;
        }

        self.cursor.bump();
        if is_js_whitespace(c) {
            return true;
        }
        self.kept += 1;

        match c {
            '/' if self.last.ends_value() => self.last = LastSignificant::Punctuator,
            '/' => self.mode = JsMode::RegexLiteral,
            '`' => self.mode = JsMode::TemplateSpan,
            ')' | ']' => self.last = LastSignificant::Value,
            _ => match Quote::from_char(c) {
                Some(quote) => self.mode = JsMode::String(quote),
                None => self.last = LastSignificant::Punctuator,
            },
        }
        true
    }

    /// Classifies the word that just ended, if any.
    fn finish_word(&mut self) {
        if let Some(start) = self.word_start.take() {
            let word = self.cursor.slice(start, self.cursor.pos());
            self.last = if VALUE_EXPECTING_KEYWORDS.contains(&word) {
                LastSignificant::Keyword
            } else {
                LastSignificant::Value
            };
        }
    }

    fn scan_line_comment(&mut self) -> bool {
        if self.cursor.skip_past_char(is_line_terminator).is_none() {
            return false;
        }
        self.mode = JsMode::Normal;
        true
    }

    fn scan_block_comment(&mut self) -> bool {
        if self.cursor.skip_past("*/").is_none() {
            log::debug!("Unterminated JavaScript block comment");
            return false;
        }
        self.mode = JsMode::Normal;
        true
    }

    /// Strings and template spans: counted verbatim through the closing delimiter.
    fn scan_literal(&mut self, close: char) -> bool {
        let run = self.cursor.consume_delimited(close);
        self.kept += run.chars;
        if !run.closed {
            log::debug!("Unterminated JavaScript literal opened with {close}");
            return false;
        }
        self.leave_literal();
        true
    }

    fn scan_regex(&mut self) -> bool {
        let run = self.cursor.consume_delimited('/');
        self.kept += run.chars;
        if !run.closed {
            log::debug!("Unterminated JavaScript regex literal");
            return false;
        }
        // flags
        self.kept += self.cursor.eat_while(is_identifier_char);
        self.leave_literal();
        true
    }

    fn leave_literal(&mut self) {
        self.mode = JsMode::Normal;
        self.last = LastSignificant::Value;
    }
}

/// Count the characters of `text` a JavaScript minifier would keep.
///
/// Unterminated strings, template spans and regex literals are counted up to
/// end of input; an unterminated block comment contributes nothing.
///
/// # Examples
/// ```
/// use minification_estimator::estimator::compute_js_token_length;
///
/// assert_eq!(compute_js_token_length("return 1 / 2 // hello"), 9);
/// assert_eq!(compute_js_token_length("/regex '/ // trailing comment"), 9);
/// ```
pub fn compute_js_token_length(text: &str) -> usize {
    JsScanner::new(text).run()
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
