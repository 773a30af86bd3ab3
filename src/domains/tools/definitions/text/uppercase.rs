//! Uppercase tool.

use rmcp::model::CallToolResult;

use super::TextParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};

#[derive(Debug, Clone, Default)]
pub struct ToUppercaseTool;

#[async_trait::async_trait]
impl ToolDefinition for ToUppercaseTool {
    const NAME: &'static str = "to_uppercase";
    const DESCRIPTION: &'static str = "Convert the given text to uppercase.";

    type Params = TextParams;

    async fn execute(params: TextParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(format!("Uppercase text: {}", params.text.to_uppercase()))
    }
}
