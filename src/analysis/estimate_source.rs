//! Estimate Source Tool
//!
//! Estimates inline source text handed over by the caller, for callers that
//! already hold the decoded body of a stylesheet or script.

use crate::analysis::{CallToolResult, MinificationReport};
use crate::estimator::estimate;
use crate::language::Language;
use serde_json::Value;
use std::io;

/// Execute the estimate_source tool
///
/// # Arguments
/// * `arguments` - JSON object with `content` and `language` (`"css"`, `"js"`
///   or `"javascript"`) fields
///
/// # Errors
/// Returns an error if either argument is missing or the language is not
/// supported.
pub fn execute(arguments: &Value) -> Result<CallToolResult, io::Error> {
    let content = arguments["content"].as_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Missing or invalid 'content' argument",
        )
    })?;

    let language_name = arguments["language"].as_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Missing or invalid 'language' argument",
        )
    })?;

    let language = Language::from_name(language_name)
        .map_err(|e| io::Error::new(io::ErrorKind::Unsupported, e.to_string()))?;

    log::info!(
        "Estimating {} source ({} bytes)",
        language.name(),
        content.len()
    );

    let estimate = estimate(content, language);

    MinificationReport::new(None, language, estimate).into_tool_result()
}
