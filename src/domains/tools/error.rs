//! Tool-specific error types.
//!
//! Only dispatch and argument binding failures live here. Upstream failures
//! of the data tools never become a `ToolError`; they are rendered as text.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A parameter the schema marks as required was absent or null.
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// An argument was mistyped, unknown, outside its enum or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing required argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingRequiredArgument(name.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}
