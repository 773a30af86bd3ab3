//! Explanation of a single API variable.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::binding::ToolParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};

/// Variables of the CostofEquity dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum ApiVariable {
    #[serde(rename = "isin")]
    Isin,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "MV")]
    MarketValue,
    #[serde(rename = "ddm_3")]
    Ddm3,
    #[serde(rename = "rim_3")]
    Rim3,
    #[serde(rename = "gewichtet_3")]
    Gewichtet3,
}

impl ApiVariable {
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Isin => {
                "ISIN (International Securities Identification Number): A 12-character alphanumeric code \
                 that uniquely identifies a specific security. Format: 2-letter country code + 9-character \
                 national identifier + 1 check digit."
            }
            Self::Date => {
                "Date: The date when the cost of equity estimates were calculated, typically in YYYY-MM-DD \
                 format. Shows when the financial analysis was performed."
            }
            Self::MarketValue => {
                "MV (Market Value): The market capitalization of the company in millions of currency units. \
                 Calculated as stock price multiplied by number of outstanding shares."
            }
            Self::Ddm3 => {
                "DDM_3 (Dividend Discount Model 3-year): A cost of equity estimate based on the dividend \
                 discount model over a 3-year period. This model values a stock based on the present value \
                 of its expected future dividends."
            }
            Self::Rim3 => {
                "RIM_3 (Residual Income Model 3-year): A cost of equity estimate using the residual income \
                 model over 3 years. This model considers the company's ability to generate returns above \
                 its cost of capital."
            }
            Self::Gewichtet3 => {
                "Gewichtet_3 (Weighted 3-year): A weighted average cost of equity estimate combining the DDM \
                 and RIM models over 3 years. This provides a more balanced estimate by incorporating both \
                 valuation approaches."
            }
        }
    }
}

/// Parameters for the explain tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExplainVariableParams {
    #[schemars(
        description = "The variable name to explain (isin, date, MV, ddm_3, rim_3, gewichtet_3)"
    )]
    pub variable: ApiVariable,
}

impl ToolParams for ExplainVariableParams {}

#[derive(Debug, Clone, Default)]
pub struct ExplainVariableTool;

#[async_trait::async_trait]
impl ToolDefinition for ExplainVariableTool {
    const NAME: &'static str = "explain_variable";
    const DESCRIPTION: &'static str = "Get detailed explanation of a specific API variable";

    type Params = ExplainVariableParams;

    async fn execute(params: ExplainVariableParams, _ctx: &ToolContext) -> CallToolResult {
        text_result(params.variable.explanation())
    }
}
