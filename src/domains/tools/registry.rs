//! Tool Registry - the fixed catalogue of Terra tools.
//!
//! [`ToolRegistry::entries`] is the single table mapping tool names to their
//! metadata and handler. The rmcp router (STDIO) and the HTTP dispatcher are
//! both built from it, so the two transports always expose the same tools.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use std::sync::Arc;
use tracing::warn;

use super::ToolError;
use super::definitions::common::{invoke, to_tool};
use super::definitions::{
    AddCustomCredentialsTool, AddDeveloperDestinationTool, AddProvidersTool,
    DeactivateProviderTool, DeleteDestinationTool, GetCustomCredentialsTool,
    GetDestinationCredentialsTool, GetDestinationsTool, GetDetailedIntegrationsTool,
    GetDeveloperProvidersTool, GetIntegrationsTool, GetProviderKeysTool,
    GetProvidersByPopularityTool, PingDeveloperDestinationTool, SearchDocumentationTool,
    SetDestinationStateTool, SetProviderKeysTool, SetProviderStateTool, TerraTool,
};
use crate::domains::terra::TerraClient;

/// Type-erased tool handler.
pub type ToolCall =
    fn(JsonObject, Arc<TerraClient>) -> BoxFuture<'static, Result<CallToolResult, ToolError>>;

/// One row of the tool catalogue.
#[derive(Clone)]
pub struct ToolEntry {
    pub name: &'static str,
    pub tool: Tool,
    pub call: ToolCall,
}

fn call_tool<T: TerraTool>(
    arguments: JsonObject,
    client: Arc<TerraClient>,
) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
    invoke::<T>(arguments, client).boxed()
}

fn entry<T: TerraTool>() -> ToolEntry {
    ToolEntry {
        name: T::NAME,
        tool: to_tool::<T>(),
        call: call_tool::<T>,
    }
}

/// Tool registry - dispatches calls by name against a shared Terra client.
pub struct ToolRegistry {
    client: Arc<TerraClient>,
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a new tool registry. The catalogue is built once here.
    pub fn new(client: Arc<TerraClient>) -> Self {
        Self {
            client,
            entries: Self::entries(),
        }
    }

    /// The complete tool catalogue.
    pub fn entries() -> Vec<ToolEntry> {
        vec![
            entry::<GetIntegrationsTool>(),
            entry::<GetDetailedIntegrationsTool>(),
            entry::<GetDestinationsTool>(),
            entry::<GetDestinationCredentialsTool>(),
            entry::<DeleteDestinationTool>(),
            entry::<SetDestinationStateTool>(),
            entry::<AddDeveloperDestinationTool>(),
            entry::<PingDeveloperDestinationTool>(),
            entry::<SetProviderKeysTool>(),
            entry::<GetProviderKeysTool>(),
            entry::<GetDeveloperProvidersTool>(),
            entry::<AddProvidersTool>(),
            entry::<DeactivateProviderTool>(),
            entry::<SetProviderStateTool>(),
            entry::<GetProvidersByPopularityTool>(),
            entry::<AddCustomCredentialsTool>(),
            entry::<GetCustomCredentialsTool>(),
            entry::<SearchDocumentationTool>(),
        ]
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        Self::entries().into_iter().map(|e| e.tool).collect()
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.entries.iter().find(|e| e.name == name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        (entry.call)(arguments, self.client.clone()).await
    }
}
