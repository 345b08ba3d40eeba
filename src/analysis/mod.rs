//! Estimation Tools
//!
//! Tool entry points that wrap the estimators for MCP callers:
//! - Estimating a CSS or JavaScript file on disk
//! - Estimating inline source text for a named language
//!
//! Each tool returns a JSON [`MinificationReport`].

pub mod estimate_file;
pub mod estimate_source;

pub use rust_mcp_sdk::schema::CallToolResult;

use rust_mcp_sdk::schema::TextContent;
use serde::Serialize;
use std::io;

use crate::estimator::MinificationEstimate;
use crate::language::Language;

/// JSON report returned by the estimation tools
#[derive(Debug, Clone, Serialize)]
pub struct MinificationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub language: &'static str,
    pub total_chars: usize,
    pub meaningful_chars: usize,
    pub removable_chars: usize,
    /// Removable share of the source, rounded to one decimal place
    pub removable_percent: f64,
}

impl MinificationReport {
    pub fn new(path: Option<&str>, language: Language, estimate: MinificationEstimate) -> Self {
        Self {
            path: path.map(str::to_string),
            language: language.name(),
            total_chars: estimate.total_chars,
            meaningful_chars: estimate.meaningful_chars,
            removable_chars: estimate.removable_chars(),
            removable_percent: (estimate.removable_ratio() * 1000.0).round() / 10.0,
        }
    }

    pub(crate) fn into_tool_result(self) -> Result<CallToolResult, io::Error> {
        let json = serde_json::to_string(&self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to serialize report to JSON: {e}"),
            )
        })?;

        Ok(CallToolResult::text_content(vec![TextContent::from(json)]))
    }
}
