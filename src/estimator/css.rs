//! CSS estimator
//!
//! Strips comments and whitespace between tokens, keeping quoted strings and
//! `/*! ... */` license comments verbatim.

use super::cursor::Cursor;
use super::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CssMode {
    Normal,
    BlockComment { preserved: bool },
    String(Quote),
}

/// Count the characters of `text` a CSS minifier would keep.
///
/// Any comment or string still open at end of input abandons the estimate and
/// the full input length is returned instead.
///
/// # Examples
/// ```
/// use minification_estimator::estimator::compute_css_token_length;
///
/// let full = ".a { /* note */ color: red; }";
/// assert_eq!(compute_css_token_length(full), ".a{color:red;}".len());
/// ```
pub fn compute_css_token_length(text: &str) -> usize {
    let mut cursor = Cursor::new(text);
    let mut mode = CssMode::Normal;
    let mut kept = 0;

    loop {
        match mode {
            CssMode::Normal => {
                if cursor.eat_pair('/', '*') {
                    let preserved = cursor.peek() == Some('!');
                    if preserved {
                        kept += 2;
                    }
                    mode = CssMode::BlockComment { preserved };
                    continue;
                }
                let Some(c) = cursor.bump() else { break };
                if is_css_whitespace(c) {
                    continue;
                }
                kept += 1;
                if let Some(quote) = Quote::from_char(c) {
                    mode = CssMode::String(quote);
                }
            }
            CssMode::BlockComment { preserved } => match cursor.skip_past("*/") {
                Some(chars) => {
                    if preserved {
                        kept += chars;
                    }
                    mode = CssMode::Normal;
                }
                None => {
                    log::debug!("Unterminated CSS comment, reporting full length");
                    return text.chars().count();
                }
            },
            CssMode::String(quote) => {
                let run = cursor.consume_delimited(quote.as_char());
                if !run.closed {
                    log::debug!("Unterminated CSS string, reporting full length");
                    return text.chars().count();
                }
                kept += run.chars;
                mode = CssMode::Normal;
            }
        }
    }

    kept
}

fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comments_and_whitespace() {
        let full = r#"
        /*
         * a complicated comment
         * that is
         * several
         * lines
         */
        .my-class {
          /* a simple comment */
          width: 100px;
          height: 100px;
        }
      "#;

        let minified = ".my-class{width:100px;height:100px;}";
        assert_eq!(compute_css_token_length(full), minified.len());
    }

    #[test]
    fn test_string_edge_cases() {
        let pairs = [
            (r#".my-class { content: "/*"; }"#, r#".my-class{content:"/*";}"#),
            (
                r#".my-class { content: '/* */'; }"#,
                r#".my-class{content:'/* */';}"#,
            ),
            (
                r#".my-class { content: "/*\\a"; }"#,
                r#".my-class{content:"/*\\a";}"#,
            ),
            (
                r#".my-class { content: "/*\"a"; }"#,
                r#".my-class{content:"/*\"a";}"#,
            ),
            (
                r#".my-class { content: "hello }"#,
                r#".my-class { content: "hello }"#,
            ),
            (
                r#".my-class { content: "hello" }"#,
                r#".my-class{content:"hello"}"#,
            ),
        ];

        for (full, minified) in pairs {
            assert_eq!(
                compute_css_token_length(full),
                minified.len(),
                "did not handle {full} properly"
            );
        }
    }

    #[test]
    fn test_comment_containing_quotes() {
        let full = r#"
        /* here is a cool "string I found" */
        .my-class {
          content: "/*";
        }
      "#;

        assert_eq!(
            compute_css_token_length(full),
            r#".my-class{content:"/*";}"#.len()
        );
    }

    #[test]
    fn test_license_comment_is_kept() {
        let full = "
        /*!
         * @LICENSE
         * Apache 2.0
         */
        .my-class {
          width: 100px;
        }
      ";

        let minified = "/*!
         * @LICENSE
         * Apache 2.0
         */.my-class{width:100px;}";
        assert_eq!(compute_css_token_length(full), minified.len());
    }

    #[test]
    fn test_unbalanced_comment_reports_full_length() {
        let full = "
        /*
        .my-class {
          width: 100px;
        }
      ";

        assert_eq!(compute_css_token_length(full), full.len());
    }

    #[test]
    fn test_unterminated_license_comment_reports_full_length() {
        let full = ".a { color: red; } /*! license";
        assert_eq!(compute_css_token_length(full), full.len());
    }

    #[test]
    fn test_data_uri_is_kept() {
        let uri = "data:image/jpeg;base64,asdfadiosgjwiojasfaasd";
        let full = format!(
            "
        .my-other-class {{
          background: data(\"{uri}\");
          height: 100px;
        }}
     "
        );

        let minified = format!(".my-other-class{{background:data(\"{uri}\");height:100px;}}");
        assert_eq!(compute_css_token_length(&full), minified.len());
    }

    #[test]
    fn test_large_stylesheet_shrinks() {
        let mut huge = String::new();
        for i in 0..10_000 {
            huge.push_str(&format!(".my-class-{i} {{ width: 100px; height: 100px; }}\n"));
        }

        let estimate = compute_css_token_length(&huge);
        assert!((estimate as f64) < 0.9 * huge.len() as f64);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(compute_css_token_length(""), 0);
        assert_eq!(compute_css_token_length(" \t\r\n"), 0);
        assert_eq!(compute_css_token_length("/* only a comment */"), 0);
    }

    #[test]
    fn test_only_space_tab_and_newlines_are_stripped() {
        assert_eq!(compute_css_token_length("a \t\r\nb"), 2);
        assert_eq!(compute_css_token_length("a\x0Cb"), 3);
        assert_eq!(compute_css_token_length("a\u{A0}b"), 3);
    }

    #[test]
    fn test_trailing_backslash_in_string() {
        let full = "a { content: \"x\\";
        assert_eq!(compute_css_token_length(full), full.len());
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(compute_css_token_length(".é { content: \"→\"; }"), 16);
    }
}
