//! Pure text tools.
//!
//! Deterministic string transforms with no I/O:
//! - `reverse`: reverse character order
//! - `count_words`: count whitespace-delimited words
//! - `uppercase`: uppercase fold

pub mod count_words;
pub mod reverse;
pub mod uppercase;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::binding::ToolParams;

pub use count_words::CountWordsTool;
pub use reverse::ReverseTextTool;
pub use uppercase::ToUppercaseTool;

/// Parameters shared by the text tools.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TextParams {
    /// Input text (default: empty string).
    #[serde(default)]
    #[schemars(description = "Input text (default: empty string)")]
    pub text: String,
}

impl ToolParams for TextParams {}
