//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::definitions::GreetingTemplate;
use super::definitions::config_checks::{check_api_key, check_dev_id};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::terra::TerraClient;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Client used for documentation fetches and credential checks.
    client: Arc<TerraClient>,

    /// Key: resource URI.
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
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

    /// Content computed at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Plain-text documentation chunk, by name (`v5`, `rt`).
    Documentation(&'static str),

    /// Presence check for the API key.
    ApiKeyCheck,

    /// Presence check for the developer id.
    DevIdCheck,
}

impl ResourceService {
    /// Create a new ResourceService backed by the given client.
    pub fn new(client: Arc<TerraClient>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.clone(), entry))
            .collect();

        Self {
            client,
            resources,
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<_> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let text = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => text.clone(),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(dynamic_type).await?
                }
            },
            None => GreetingTemplate::render(uri).ok_or_else(|| ResourceError::not_found(uri))?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Resolve dynamic resource content.
    async fn resolve_dynamic_content(
        &self,
        dynamic_type: &DynamicResourceType,
    ) -> Result<String, ResourceError> {
        match dynamic_type {
            DynamicResourceType::Documentation(chunk) => {
                let client = self.client.clone();
                let chunk = *chunk;
                let text = tokio::task::spawn_blocking(move || client.fetch_documentation(chunk))
                    .await
                    .map_err(|e| ResourceError::internal(format!("Task failed: {e}")))??;
                Ok(text)
            }
            DynamicResourceType::ApiKeyCheck => check_api_key(self.client.credentials()),
            DynamicResourceType::DevIdCheck => check_dev_id(self.client.credentials()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use mockito::Server;

    fn service_with(config: Config) -> ResourceService {
        ResourceService::new(Arc::new(TerraClient::new(&config)))
    }

    fn text_of(result: &ReadResourceResult) -> String {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_lists_resources() {
        let service = service_with(Config::default());
        assert_eq!(service.list_resources().await.len(), 5);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_about_resource() {
        let service = service_with(Config::default());
        let result = service.read_resource("config://about").await.unwrap();
        assert!(text_of(&result).contains("Terra API"));
    }

    #[tokio::test]
    async fn test_read_greeting_template() {
        let service = service_with(Config::default());
        let result = service.read_resource("greeting://Sam").await.unwrap();
        assert_eq!(
            text_of(&result),
            "Hello, Sam! Welcome to the Terra MCP server!"
        );
    }

    #[tokio::test]
    async fn test_greeting_name_is_one_segment() {
        let service = service_with(Config::default());
        let result = service.read_resource("greeting://a/b").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service_with(Config::default());
        let result = service.read_resource("docs://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_api_key_check() {
        let service = service_with(Config::default());
        let result = service.read_resource("config://api_key").await;
        assert!(matches!(result, Err(ResourceError::Configuration(_))));

        let mut config = Config::default();
        config.credentials.api_key = Some("live-key".to_string());
        let service = service_with(config);
        let result = service.read_resource("config://api_key").await.unwrap();
        assert!(text_of(&result).contains("live-key"));
    }

    #[tokio::test]
    async fn test_read_documentation_success() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/chunked/v5.txt")
            .with_status(200)
            .with_body("paths: /activity")
            .create_async()
            .await;

        let mut config = Config::default();
        config.api.docs_base_url = format!("{}/chunked", server.url());
        let service = service_with(config);

        let result = service.read_resource("docs://v5_api").await.unwrap();
        assert_eq!(text_of(&result), "paths: /activity");
    }

    #[tokio::test]
    async fn test_read_documentation_failure_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/chunked/rt.txt")
            .with_status(503)
            .with_body("upstream garbage")
            .create_async()
            .await;

        let mut config = Config::default();
        config.api.docs_base_url = format!("{}/chunked", server.url());
        let service = service_with(config);

        let err = service.read_resource("docs://rt_api").await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch documentation"));
        assert!(!err.to_string().contains("upstream garbage"));
    }
}
