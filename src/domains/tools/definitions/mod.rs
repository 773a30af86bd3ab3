//! Tool definitions module.
//!
//! Each tool is a unit struct implementing [`ToolDefinition`]: a name, a
//! description, a parameter struct and an async `execute`. The generic
//! helpers below turn a definition into rmcp metadata, a router entry, or a
//! direct invocation, so the registry and the router stay in sync.

pub mod common;
pub mod equity;
pub mod greet;
pub mod text;

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::info;

use super::binding::{ToolParams, bind};
use super::context::ToolContext;
use super::error::ToolError;

pub use equity::{
    ApiVariablesTool, CostOfEquityTool, ExplainVariableTool, FetchCostOfEquityDataTool,
};
pub use greet::GreetTool;
pub use text::{CountWordsTool, ReverseTextTool, ToUppercaseTool};

/// Trait for tool definitions.
#[async_trait::async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP. Unique within the registry.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed parameters; their JSON schema becomes the tool's input schema.
    type Params: ToolParams;

    /// Run the tool on already bound parameters.
    async fn execute(params: Self::Params, ctx: &ToolContext) -> CallToolResult;
}

/// Create a Tool model (metadata) for a definition.
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: schema_for_type::<T::Params>().into(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Bind the raw arguments and execute the tool.
pub async fn invoke<T: ToolDefinition>(
    ctx: &ToolContext,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, ToolError> {
    let params = bind::<T::Params>(arguments)?;
    info!("Calling tool: {}", T::NAME);
    Ok(T::execute(params, ctx).await)
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(ctx: Arc<ToolContext>) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |call: ToolCallContext<'_, S>| {
        let arguments = call.arguments.clone();
        let ctx = ctx.clone();
        async move { invoke::<T>(&ctx, arguments).await.map_err(McpError::from) }.boxed()
    })
}
