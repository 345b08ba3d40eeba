//! MCP Tool definitions and implementations
//!
//! This module defines the tools provided by the minification-estimator server
//! using the rust-mcp-sdk macros and conventions.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use rust_mcp_sdk::tool_box;

use crate::analysis::{estimate_file, estimate_source};

/// Estimate how much of a CSS or JavaScript file is removable by minification
#[mcp_tool(
    name = "estimate_file",
    description = "Estimate how many characters of a CSS or JavaScript file would survive minification (whitespace and comment removal) without running a minifier. The language is detected from the file extension (.css, .js, .mjs, .cjs). Returns JSON with total_chars, meaningful_chars, removable_chars and removable_percent. Strings, template literals and regex literals are never counted as removable."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct EstimateFileTool {
    /// Path to the CSS or JavaScript file
    pub file_path: String,
}

/// Estimate how much of inline CSS or JavaScript source is removable by minification
#[mcp_tool(
    name = "estimate_source",
    description = "Estimate how many characters of inline CSS or JavaScript source text would survive minification (whitespace and comment removal) without running a minifier. Use this when the source is already in hand, e.g. a fetched response body or an inline <style>/<script> block. Returns the same JSON report as estimate_file, without a path."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct EstimateSourceTool {
    /// Source text to estimate
    pub content: String,
    /// Source language: "css", "js" or "javascript" (default: "javascript")
    #[serde(default)]
    pub language: Option<String>,
}

impl EstimateFileTool {
    pub fn call_tool(&self) -> Result<CallToolResult, CallToolError> {
        let args = serde_json::json!({
            "file_path": self.file_path
        });

        estimate_file::execute(&args).map_err(CallToolError::new)
    }
}

impl EstimateSourceTool {
    pub fn call_tool(&self) -> Result<CallToolResult, CallToolError> {
        let args = serde_json::json!({
            "content": self.content,
            "language": self.language.as_deref().unwrap_or("javascript")
        });

        estimate_source::execute(&args).map_err(CallToolError::new)
    }
}

// Generate an enum with all tools
tool_box!(EstimatorTools, [EstimateFileTool, EstimateSourceTool]);
