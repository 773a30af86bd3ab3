//! Listing of the first N dataset records.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use super::records::{describe_fetch_error, parse_records, render_block};
use crate::domains::tools::binding::ToolParams;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definitions::{ToolDefinition, common::text_result};
use crate::domains::tools::error::ToolError;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    10
}

/// Parameters for the listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FetchCostOfEquityDataParams {
    /// Number of records to return (default: 10, max: 100).
    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of records to return (default: 10, max: 100)",
        range(min = 1, max = 100)
    )]
    pub limit: u32,
}

impl Default for FetchCostOfEquityDataParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl ToolParams for FetchCostOfEquityDataParams {
    fn validate(self) -> Result<Self, ToolError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            return Err(ToolError::invalid_argument(format!(
                "limit must be between {} and {}, got {}",
                MIN_LIMIT, MAX_LIMIT, self.limit
            )));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchCostOfEquityDataTool;

#[async_trait::async_trait]
impl ToolDefinition for FetchCostOfEquityDataTool {
    const NAME: &'static str = "fetch_cost_of_equity_data";
    const DESCRIPTION: &'static str = "Fetch cost of equity data from the marktrendite.ai API. \
         Returns the first N records (default 10, max 100) with ISIN, date, market value \
         and the DDM, RIM and weighted 3-year estimates.";

    type Params = FetchCostOfEquityDataParams;

    async fn execute(params: FetchCostOfEquityDataParams, ctx: &ToolContext) -> CallToolResult {
        info!(
            "Fetching {} record(s) from {} (timeout {}s)",
            params.limit,
            ctx.source().describe(),
            ctx.config().upstream.timeout_secs
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

        let shown = &records[..records.len().min(params.limit as usize)];
        let mut out = format!(
            "Fetched {} records from MarktTrendite API:\n\n",
            shown.len()
        );
        for (i, record) in shown.iter().enumerate() {
            out.push_str(&render_block(i + 1, record));
            out.push('\n');
        }

        text_result(out)
    }
}
