//! MCP Server Handler Implementation
//!
//! This module implements the ServerHandler trait to handle MCP protocol messages
//! and route tool calls to the estimation tools.

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    schema_utils::CallToolError, CallToolRequestParams, CallToolResult, ListToolsResult,
    PaginatedRequestParams, RpcError,
};
use rust_mcp_sdk::{mcp_server::ServerHandler, McpServer};
use std::sync::Arc;

use crate::tools::EstimatorTools;

/// Handler for the minification estimator MCP server
#[derive(Default)]
pub struct EstimatorServerHandler;

impl EstimatorServerHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServerHandler for EstimatorServerHandler {
    async fn handle_list_tools_request(
        &self,
        _request: Option<PaginatedRequestParams>,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            tools: EstimatorTools::tools(),
            meta: None,
            next_cursor: None,
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequestParams,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<CallToolResult, CallToolError> {
        log::info!("Calling tool: {}", request.name);

        let tool: EstimatorTools = EstimatorTools::try_from(request)?;

        match tool {
            EstimatorTools::EstimateFileTool(t) => t.call_tool(),
            EstimatorTools::EstimateSourceTool(t) => t.call_tool(),
        }
    }
}
