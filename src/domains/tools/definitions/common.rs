//! Shared plumbing for Terra tools.
//!
//! Every tool goes through the same steps: deserialize the arguments into
//! its typed parameters, build an [`ApiRequest`], run it on the blocking
//! pool, then turn the (optionally unwrapped) JSON into a `CallToolResult`.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::TerraTool;
use crate::domains::terra::TerraClient;
use crate::domains::tools::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result from a response value.
///
/// Strings are returned as-is, anything else as pretty-printed JSON.
pub fn value_result(value: Value) -> CallToolResult {
    let text = match value {
        Value::String(s) => s,
        other => serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string()),
    };
    CallToolResult::success(vec![Content::text(text)])
}

/// Create a Tool model (metadata) for a tool definition.
pub fn to_tool<T: TerraTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize raw call arguments into the tool's parameters.
pub fn parse_params<T: TerraTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Run a tool against the Terra API. Blocks on the network call.
pub fn execute<T: TerraTool>(params: T::Params, client: &TerraClient) -> CallToolResult {
    info!("Calling Terra tool: {}", T::NAME);

    let request = T::build_request(params, client.dev_id());
    match client.execute(&request) {
        Ok(body) => value_result(T::unwrap_response(body)),
        Err(e) => error_result(&format!("{} failed: {}", T::NAME, e)),
    }
}

/// Parse arguments and execute a tool on the blocking pool.
pub async fn invoke<T: TerraTool>(
    arguments: JsonObject,
    client: Arc<TerraClient>,
) -> Result<CallToolResult, ToolError> {
    let params = parse_params::<T>(arguments)?;

    tokio::task::spawn_blocking(move || execute::<T>(params, &client))
        .await
        .map_err(|e| ToolError::internal(format!("{} task failed: {}", T::NAME, e)))
}
