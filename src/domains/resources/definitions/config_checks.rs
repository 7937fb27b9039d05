//! Configuration presence checks.
//!
//! Reading one of these resources fails when the credential is unset and
//! otherwise echoes it back. Echoing the API key is intentional for local
//! debugging by the operator; revisit if the server is ever exposed to
//! untrusted clients.

use super::ResourceDefinition;
use crate::core::config::CredentialsConfig;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

pub struct ApiKeyResource;

impl ResourceDefinition for ApiKeyResource {
    const URI: &'static str = "config://api_key";
    const NAME: &'static str = "API Key Check";
    const DESCRIPTION: &'static str = "Check whether the Terra API key is set";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ApiKeyCheck)
    }
}

pub struct DevIdResource;

impl ResourceDefinition for DevIdResource {
    const URI: &'static str = "config://dev_id";
    const NAME: &'static str = "Developer ID Check";
    const DESCRIPTION: &'static str = "Check whether the Terra developer ID is set";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::DevIdCheck)
    }
}

pub fn check_api_key(credentials: &CredentialsConfig) -> Result<String, ResourceError> {
    credentials
        .api_key
        .as_deref()
        .map(|key| format!("API key is set: {key}"))
        .ok_or_else(|| {
            ResourceError::configuration(
                "API key is not set. Please set the TERRA_API_KEY environment variable.",
            )
        })
}

pub fn check_dev_id(credentials: &CredentialsConfig) -> Result<String, ResourceError> {
    credentials
        .dev_id
        .as_deref()
        .map(|id| format!("Developer ID is set: {id}"))
        .ok_or_else(|| {
            ResourceError::configuration(
                "Developer ID is not set. Please set the TERRA_DEV_ID environment variable.",
            )
        })
}
