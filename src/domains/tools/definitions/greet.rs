//! Greeting tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolDefinition;
use super::common::text_result;
use crate::domains::tools::binding::ToolParams;
use crate::domains::tools::context::ToolContext;

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GreetParams {
    #[schemars(description = "Name of the person to greet")]
    pub name: String,
}

impl ToolParams for GreetParams {}

/// Returns a friendly greeting.
#[derive(Debug, Clone, Default)]
pub struct GreetTool;

impl GreetTool {
    /// Render the greeting for a name.
    pub fn greeting(name: &str) -> String {
        format!("Hello, {}!", name)
    }
}

#[async_trait::async_trait]
impl ToolDefinition for GreetTool {
    const NAME: &'static str = "greet";
    const DESCRIPTION: &'static str = "Return a friendly greeting.";

    type Params = GreetParams;

    async fn execute(params: GreetParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(Self::greeting(&params.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(GreetTool::greeting("World"), "Hello, World!");
        assert_eq!(GreetTool::greeting(""), "Hello, !");
    }

    #[test]
    fn test_params_require_name() {
        let result = serde_json::from_str::<GreetParams>("{}");
        assert!(result.is_err());
    }
}
