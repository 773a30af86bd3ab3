//! Helpers shared by all tool definitions.

use rmcp::model::{CallToolResult, Content};
#[cfg(test)]
use rmcp::model::RawContent;

/// Create a success result with a single text block.
pub fn text_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Concatenated text of all text blocks in a result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
