//! Minified Terra OpenAPI documentation, fetched on every read.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// v5 REST API documentation.
pub struct V5ApiDocsResource;

impl ResourceDefinition for V5ApiDocsResource {
    const URI: &'static str = "docs://v5_api";
    const NAME: &'static str = "Terra v5 API Documentation";
    const DESCRIPTION: &'static str = "Get minified v5 TerraAPI OpenAPI documentation";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Documentation("v5"))
    }
}

/// Real-time API documentation.
pub struct RealtimeApiDocsResource;

impl ResourceDefinition for RealtimeApiDocsResource {
    const URI: &'static str = "docs://rt_api";
    const NAME: &'static str = "Terra Real-Time API Documentation";
    const DESCRIPTION: &'static str = "Get minified real-time TerraAPI OpenAPI documentation";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Documentation("rt"))
    }
}
