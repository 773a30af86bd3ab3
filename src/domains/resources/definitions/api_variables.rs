//! API variable documentation resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::equity::api_variables::API_VARIABLES_DOC;

/// The CostofEquity variable documentation (static Markdown).
pub struct ApiVariablesResource;

impl ResourceDefinition for ApiVariablesResource {
    const URI: &'static str = "marktrendite://api/variables";
    const NAME: &'static str = "CostofEquity API Variables";
    const DESCRIPTION: &'static str =
        "Variables returned by the marktrendite.ai CostofEquity API and their meaning";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(API_VARIABLES_DOC.to_string())
    }
}
