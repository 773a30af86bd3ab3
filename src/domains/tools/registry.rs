//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed list of available tools and their metadata
//! - Lookup of a tool by name
//! - Direct dispatch of a tool call (used by the HTTP transport and tests)

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::context::ToolContext;
use super::definitions::{
    ApiVariablesTool, CostOfEquityTool, CountWordsTool, ExplainVariableTool,
    FetchCostOfEquityDataTool, GreetTool, ReverseTextTool, ToUppercaseTool, ToolDefinition,
    invoke, to_tool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
///
/// Built once at startup; the tool list never changes afterwards.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Create a new tool registry over a shared context.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self {
            context,
            tools: Self::get_all_tools(),
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GreetTool::NAME,
            ReverseTextTool::NAME,
            CountWordsTool::NAME,
            ToUppercaseTool::NAME,
            ApiVariablesTool::NAME,
            ExplainVariableTool::NAME,
            FetchCostOfEquityDataTool::NAME,
            CostOfEquityTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<GreetTool>(),
            to_tool::<ReverseTextTool>(),
            to_tool::<CountWordsTool>(),
            to_tool::<ToUppercaseTool>(),
            to_tool::<ApiVariablesTool>(),
            to_tool::<ExplainVariableTool>(),
            to_tool::<FetchCostOfEquityDataTool>(),
            to_tool::<CostOfEquityTool>(),
        ]
    }

    /// List all registered tools.
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Exact-match lookup of a tool by name.
    pub fn resolve_tool(&self, name: &str) -> Result<&Tool, ToolError> {
        self.tools
            .iter()
            .find(|tool| tool.name == name)
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    /// Dispatch a tool call to the appropriate definition.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let ctx = self.context.as_ref();
        match name {
            GreetTool::NAME => invoke::<GreetTool>(ctx, arguments).await,
            ReverseTextTool::NAME => invoke::<ReverseTextTool>(ctx, arguments).await,
            CountWordsTool::NAME => invoke::<CountWordsTool>(ctx, arguments).await,
            ToUppercaseTool::NAME => invoke::<ToUppercaseTool>(ctx, arguments).await,
            ApiVariablesTool::NAME => invoke::<ApiVariablesTool>(ctx, arguments).await,
            ExplainVariableTool::NAME => invoke::<ExplainVariableTool>(ctx, arguments).await,
            FetchCostOfEquityDataTool::NAME => {
                invoke::<FetchCostOfEquityDataTool>(ctx, arguments).await
            }
            CostOfEquityTool::NAME => invoke::<CostOfEquityTool>(ctx, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}
