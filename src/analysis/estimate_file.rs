//! Estimate File Tool
//!
//! Reads a CSS or JavaScript file, picks the estimator from the file
//! extension and reports how much of the file a minifier could remove.

use crate::analysis::{CallToolResult, MinificationReport};
use crate::estimator::estimate;
use crate::language::detect_language;
use serde_json::Value;
use std::fs;
use std::io;

/// Execute the estimate_file tool
///
/// # Arguments
/// * `arguments` - JSON object with `file_path` field
///
/// # Returns
/// Returns a `CallToolResult` with a JSON [`MinificationReport`] containing
/// `path`, `language`, `total_chars`, `meaningful_chars`, `removable_chars`
/// and `removable_percent`.
///
/// # Errors
/// Returns an error if:
/// - The `file_path` argument is missing or invalid
/// - The file extension is not supported
/// - The file cannot be read
pub fn execute(arguments: &Value) -> Result<CallToolResult, io::Error> {
    let file_path = arguments["file_path"].as_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Missing or invalid 'file_path' argument",
        )
    })?;

    log::info!("Estimating file: {file_path}");

    let language = detect_language(file_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Unsupported,
            format!("Cannot detect language for file {file_path}: {e}"),
        )
    })?;

    log::debug!("Detected language: {}", language.name());

    let source = fs::read_to_string(file_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read file {file_path}: {e}"),
        )
    })?;

    let estimate = estimate(&source, language);

    MinificationReport::new(Some(file_path), language, estimate).into_tool_result()
}
