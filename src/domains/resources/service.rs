//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ResourcesConfig;
use crate::domains::tools::ToolRegistry;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Configuration for the resources domain.
    config: ResourcesConfig,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server and upstream information.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let tools: Vec<String> = ToolRegistry::get_all_tools()
                    .into_iter()
                    .map(|t| t.name.into_owned())
                    .collect();

                let info = serde_json::json!({
                    "server": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                    "upstream": {
                        "url": self.config.upstream_url,
                        "timeout_secs": self.config.upstream_timeout_secs,
                    },
                    "tools": tools,
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::equity::api_variables::API_VARIABLES_DOC;

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("unexpected contents: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new(ResourcesConfig::default());
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_api_variables() {
        let service = ResourceService::new(ResourcesConfig::default());
        let result = service
            .read_resource("marktrendite://api/variables")
            .await
            .unwrap();
        assert_eq!(text_of(&result), API_VARIABLES_DOC);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let config = ResourcesConfig {
            upstream_url: "http://localhost:8000/coe".to_string(),
            upstream_timeout_secs: 4,
        };
        let service = ResourceService::new(config);
        let result = service
            .read_resource("marktrendite://server/info")
            .await
            .unwrap();

        let info: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(info["upstream"]["url"], "http://localhost:8000/coe");
        assert_eq!(info["upstream"]["timeout_secs"], 4);
        assert_eq!(info["tools"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new(ResourcesConfig::default());
        let result = service.read_resource("marktrendite://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
