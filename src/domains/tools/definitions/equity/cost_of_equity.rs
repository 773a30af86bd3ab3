//! Dataset summary and single-ISIN lookup.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::records::{
    describe_fetch_error, find_by_isin, parse_records, render_match, render_not_found,
    render_summary,
};
use crate::domains::tools::binding::ToolParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};
use crate::domains::tools::error::ToolError;

/// Parameters for the cost of equity tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CostOfEquityParams {
    /// Optional ISIN filter. Case-insensitive.
    #[serde(default)]
    #[schemars(
        description = "Optional ISIN to look up (e.g. AT0000730007). Omit for a dataset summary."
    )]
    pub isin: Option<String>,
}

impl ToolParams for CostOfEquityParams {
    fn validate(self) -> Result<Self, ToolError> {
        // The dataset stores identifiers in upper case.
        let isin = self
            .isin
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty());
        Ok(Self { isin })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CostOfEquityTool;

#[async_trait::async_trait]
impl ToolDefinition for CostOfEquityTool {
    const NAME: &'static str = "get_cost_of_equity";
    const DESCRIPTION: &'static str = "Get cost of equity data from marktrendite.ai. \
         Without an ISIN, returns a summary of the dataset (record count, as-of date, \
         average weighted 3-year estimate, examples). With an ISIN, returns the weighted, \
         DDM and RIM 3-year estimates, market value and date of that security.";

    type Params = CostOfEquityParams;

    async fn execute(params: CostOfEquityParams, ctx: &ToolContext) -> CallToolResult {
        info!(
            "Fetching cost of equity data from {} (isin: {:?})",
            ctx.source().describe(),
            params.isin
        );

        let body = match ctx.source().fetch().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Upstream fetch failed ({}): {}", e.category(), e);
                return text_result(describe_fetch_error(&e));
            }
        };

        let records = match parse_records(body) {
            Ok(records) => records,
            Err(e) => {
                warn!("Unusable upstream data: {}", e);
                return text_result(e.to_string());
            }
        };
        debug!("Received {} records", records.len());

        match params.isin.as_deref() {
            None => text_result(render_summary(&records)),
            Some(isin) => match find_by_isin(&records, isin) {
                Some(record) => text_result(render_match(record)),
                None => {
                    info!("ISIN {} not found among {} records", isin, records.len());
                    text_result(render_not_found(isin, records.len()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isin_normalized() {
        let params = CostOfEquityParams {
            isin: Some("  at0000730007 ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(params.isin.as_deref(), Some("AT0000730007"));
    }

    #[test]
    fn test_blank_isin_means_summary() {
        let params = CostOfEquityParams {
            isin: Some("   ".into()),
        }
        .validate()
        .unwrap();
        assert!(params.isin.is_none());
    }
}
