//! Word count tool.

use rmcp::model::CallToolResult;

use super::TextParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};

/// Counts whitespace-delimited words.
#[derive(Debug, Clone, Default)]
pub struct CountWordsTool;

impl CountWordsTool {
    /// Runs of whitespace count as one separator.
    pub fn count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[async_trait::async_trait]
impl ToolDefinition for CountWordsTool {
    const NAME: &'static str = "count_words";
    const DESCRIPTION: &'static str = "Count the whitespace-delimited words in the given text.";

    type Params = TextParams;

    async fn execute(params: TextParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(format!("Word count: {}", Self::count(&params.text)))
    }
}
