//! Tool Router - builds the rmcp ToolRouter from the registry.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::{ToolEntry, ToolRegistry};
use crate::domains::terra::TerraClient;

/// Create a ToolRoute for one registry entry.
fn route_for<S>(entry: ToolEntry, client: Arc<TerraClient>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let call = entry.call;
    ToolRoute::new_dyn(entry.tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move { call(args, client).await.map_err(McpError::from) }.boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<TerraClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::entries()
        .into_iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(route_for(entry, client.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_client() -> Arc<TerraClient> {
        Arc::new(TerraClient::new(&Config::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 18);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_integrations"));
        assert!(names.contains(&"add_developer_destination"));
        assert!(names.contains(&"set_provider_keys"));
        assert!(names.contains(&"search_documentation"));
    }

    #[test]
    fn test_registry_matches_router() {
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
