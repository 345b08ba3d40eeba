use eyre::{bail, Result};
use std::path::Path;

use crate::estimator::{compute_css_token_length, compute_js_token_length};

/// Source languages the estimators understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// CSS stylesheets (.css)
    Css,
    /// JavaScript (.js, .mjs, .cjs)
    JavaScript,
}

impl Language {
    /// Get a human-readable name for the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Resolve a language from a user-supplied name such as `"css"` or `"js"`
    ///
    /// # Examples
    /// ```
    /// use minification_estimator::language::Language;
    ///
    /// assert_eq!(Language::from_name("CSS").unwrap(), Language::Css);
    /// assert_eq!(Language::from_name("javascript").unwrap(), Language::JavaScript);
    /// assert!(Language::from_name("html").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "css" => Ok(Language::Css),
            "js" | "javascript" => Ok(Language::JavaScript),
            other => bail!("Unsupported language: {other} (expected 'css' or 'javascript')"),
        }
    }

    /// Count the meaningful characters of `text` with this language's estimator
    pub fn token_length(&self, text: &str) -> usize {
        match self {
            Language::Css => compute_css_token_length(text),
            Language::JavaScript => compute_js_token_length(text),
        }
    }
}

/// Detect the source language from a file path extension
///
/// Detection is case-insensitive.
///
/// # Supported Extensions
/// - `.css` → CSS
/// - `.js`, `.mjs`, `.cjs` → JavaScript
///
/// # Errors
/// Returns an error if:
/// - The file has no extension
/// - The extension is not supported
///
/// # Examples
/// ```
/// use minification_estimator::language::{detect_language, Language};
///
/// let lang = detect_language("static/site.css").unwrap();
/// assert_eq!(lang, Language::Css);
///
/// // Case insensitive
/// let lang = detect_language("bundle.MJS").unwrap();
/// assert_eq!(lang, Language::JavaScript);
///
/// // Unsupported extension
/// assert!(detect_language("index.html").is_err());
/// ```
pub fn detect_language(path: impl AsRef<Path>) -> Result<Language> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("css") => Ok(Language::Css),
        Some("js") | Some("mjs") | Some("cjs") => Ok(Language::JavaScript),
        Some(ext) => {
            bail!("Unsupported file extension: .{}", ext)
        }
        None => {
            bail!("No file extension found in path: {}", path.display())
        }
    }
}
