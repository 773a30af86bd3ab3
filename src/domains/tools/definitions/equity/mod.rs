//! MarktTrendite cost of equity tools.
//!
//! This module provides tools over the MarktTrendite CostofEquity dataset:
//! - `api_variables`: static documentation of the dataset variables
//! - `explain`: detailed explanation of a single variable
//! - `fetch_data`: first N records as labelled blocks
//! - `cost_of_equity`: dataset summary or lookup of one ISIN
//!
//! The dataset is fetched in full on every call through a [`CostOfEquitySource`];
//! nothing is cached between calls.

pub mod api_variables;
pub mod cost_of_equity;
pub mod explain;
pub mod fetch_data;
pub mod records;
pub mod source;

pub use api_variables::ApiVariablesTool;
pub use cost_of_equity::{CostOfEquityParams, CostOfEquityTool};
pub use explain::{ApiVariable, ExplainVariableParams, ExplainVariableTool};
pub use fetch_data::{FetchCostOfEquityDataParams, FetchCostOfEquityDataTool};
pub use records::{DataError, SecurityRecord};
pub use source::{CostOfEquitySource, FetchError, HttpCostOfEquitySource};
