//! Tool definitions module.
//!
//! Each tool is a unit struct implementing [`TerraTool`]: its name,
//! description, typed parameters and the request those parameters map to.
//! Routing, dispatch and result formatting live in `common.rs`.

use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::terra::ApiRequest;

pub mod common;
pub mod dashboard;
pub mod docs;
pub mod integrations;

pub use dashboard::{
    AddCustomCredentialsTool, AddDeveloperDestinationTool, AddProvidersTool,
    DeactivateProviderTool, DeleteDestinationTool, GetCustomCredentialsTool,
    GetDestinationCredentialsTool, GetDestinationsTool, GetDeveloperProvidersTool,
    GetProviderKeysTool, GetProvidersByPopularityTool, PingDeveloperDestinationTool,
    SetDestinationStateTool, SetProviderKeysTool, SetProviderStateTool,
};
pub use docs::SearchDocumentationTool;
pub use integrations::{GetDetailedIntegrationsTool, GetIntegrationsTool};

/// A tool that forwards one call to the Terra API.
pub trait TerraTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed call parameters. Optional parameters are `Option<T>`.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Build the upstream request. `dev_id` is the configured developer id.
    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest;

    /// Post-process the parsed response body. Passthrough by default.
    fn unwrap_response(body: Value) -> Value {
        body
    }
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}
