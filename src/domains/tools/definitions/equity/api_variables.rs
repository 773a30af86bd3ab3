//! Static documentation of the CostofEquity API variables.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::binding::ToolParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};

/// Markdown description of the dataset. Also served as a resource.
pub const API_VARIABLES_DOC: &str = "\
# MarktTrendite.ai CostofEquity API Variables

The API returns financial data with the following variables:

**Basic Information:**
- `isin`: International Securities Identification Number (unique identifier for securities)
- `date`: Date of the data record (format: YYYY-MM-DD)
- `MV`: Market Value in millions (market capitalization)

**Cost of Equity Models:**
- `ddm_3`: Dividend Discount Model 3-year estimate (%)
- `rim_3`: Residual Income Model 3-year estimate (%)
- `gewichtet_3`: Weighted 3-year estimate (%) - combines DDM and RIM models

**API Endpoint:** https://api.marktrendite.ai/CostofEquity

The data covers European stocks including Austrian, German, Swiss, and other European markets.";

/// The tool takes no parameters. Any arguments sent are ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ApiVariablesParams {}

impl ToolParams for ApiVariablesParams {}

#[derive(Debug, Clone, Default)]
pub struct ApiVariablesTool;

#[async_trait::async_trait]
impl ToolDefinition for ApiVariablesTool {
    const NAME: &'static str = "get_api_variables";
    const DESCRIPTION: &'static str =
        "Get information about available variables in the marktrendite.ai CostofEquity API";

    type Params = ApiVariablesParams;

    async fn execute(_params: ApiVariablesParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(API_VARIABLES_DOC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_lists_every_variable() {
        for variable in ["isin", "date", "MV", "ddm_3", "rim_3", "gewichtet_3"] {
            assert!(
                API_VARIABLES_DOC.contains(&format!("`{}`", variable)),
                "missing {variable}"
            );
        }
    }

    #[test]
    fn test_params_ignore_extra_arguments() {
        let params: Result<ApiVariablesParams, _> =
            serde_json::from_str(r#"{"anything": 1}"#);
        assert!(params.is_ok());
    }
}
