//! Argument binding.
//!
//! Turns the raw JSON arguments of a `tools/call` request into a typed
//! parameter struct. The generated JSON schema of the struct is the single
//! source of truth for which parameters are required; serde applies defaults
//! and rejects unknown or mistyped fields; [`ToolParams::validate`] handles
//! range checks and normalization.

use rmcp::{handler::server::tool::schema_for_type, model::JsonObject};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ToolError;

/// Parameter struct of a tool.
pub trait ToolParams: DeserializeOwned + JsonSchema + Send + Sized + 'static {
    /// Check constraints serde cannot express and normalize values.
    fn validate(self) -> Result<Self, ToolError> {
        Ok(self)
    }
}

/// Names listed in the `required` array of a JSON schema object.
pub fn required_parameters(schema: &JsonObject) -> impl Iterator<Item = &str> + '_ {
    schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Bind raw arguments to the parameter struct `P`.
pub fn bind<P: ToolParams>(arguments: Option<JsonObject>) -> Result<P, ToolError> {
    let arguments = arguments.unwrap_or_default();
    let schema = schema_for_type::<P>();

    if let Some(missing) = required_parameters(&schema)
        .find(|name| matches!(arguments.get(*name), None | Some(Value::Null)))
    {
        return Err(ToolError::missing_argument(missing));
    }

    let params: P = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_argument(e.to_string()))?;

    params.validate()
}
