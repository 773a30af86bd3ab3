//! Reverse text tool.

use rmcp::model::CallToolResult;

use super::TextParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};

/// Reverses the characters of a string.
#[derive(Debug, Clone, Default)]
pub struct ReverseTextTool;

impl ReverseTextTool {
    /// Reverse by Unicode scalar value.
    pub fn reverse(text: &str) -> String {
        text.chars().rev().collect()
    }
}

#[async_trait::async_trait]
impl ToolDefinition for ReverseTextTool {
    const NAME: &'static str = "reverse_text";
    const DESCRIPTION: &'static str = "Reverse the order of characters in the given text.";

    type Params = TextParams;

    async fn execute(params: TextParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(format!("Reversed text: {}", Self::reverse(&params.text)))
    }
}
