//! Minification Estimators
//!
//! Single-pass lexical scanners that count how many characters of a CSS or
//! JavaScript source would survive whitespace and comment removal, without
//! running a real minifier:
//! - [`compute_css_token_length`] for stylesheets
//! - [`compute_js_token_length`] for scripts
//!
//! Both functions are total over any input and keep no state between calls.

mod css;
mod cursor;
mod js;

pub use css::compute_css_token_length;
pub use js::compute_js_token_length;

use crate::language::Language;

/// Quote character opening a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Single,
    Double,
}

impl Quote {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Outcome of estimating one source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinificationEstimate {
    /// Characters in the original text
    pub total_chars: usize,
    /// Characters a minifier would keep
    pub meaningful_chars: usize,
}

impl MinificationEstimate {
    pub fn removable_chars(&self) -> usize {
        self.total_chars.saturating_sub(self.meaningful_chars)
    }

    /// Share of the text that could be removed, between 0.0 and 1.0
    pub fn removable_ratio(&self) -> f64 {
        if self.total_chars == 0 {
            return 0.0;
        }
        self.removable_chars() as f64 / self.total_chars as f64
    }
}

/// Estimate the minified size of `text` written in `language`.
pub fn estimate(text: &str, language: Language) -> MinificationEstimate {
    let estimate = MinificationEstimate {
        total_chars: text.chars().count(),
        meaningful_chars: language.token_length(text),
    };

    log::debug!(
        "{} estimate: {} of {} chars meaningful",
        language.name(),
        estimate.meaningful_chars,
        estimate.total_chars
    );

    estimate
}
