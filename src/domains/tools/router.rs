//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! goes through the same binding and execution path as [`ToolRegistry::call_tool`].
//!
//! [`ToolRegistry::call_tool`]: super::ToolRegistry::call_tool

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{
    ApiVariablesTool, CostOfEquityTool, CountWordsTool, ExplainVariableTool,
    FetchCostOfEquityDataTool, GreetTool, ReverseTextTool, ToUppercaseTool, create_route,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<GreetTool, S>(ctx.clone()))
        .with_route(create_route::<ReverseTextTool, S>(ctx.clone()))
        .with_route(create_route::<CountWordsTool, S>(ctx.clone()))
        .with_route(create_route::<ToUppercaseTool, S>(ctx.clone()))
        .with_route(create_route::<ApiVariablesTool, S>(ctx.clone()))
        .with_route(create_route::<ExplainVariableTool, S>(ctx.clone()))
        .with_route(create_route::<FetchCostOfEquityDataTool, S>(ctx.clone()))
        .with_route(create_route::<CostOfEquityTool, S>(ctx))
}
