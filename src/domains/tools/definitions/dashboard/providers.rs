//! Provider management tools.
//!
//! A provider is an upstream data source (wearable vendor, health app)
//! enabled per developer account.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::terra::{ApiRequest, Params};
use crate::domains::tools::definitions::{NoParams, TerraTool};

const PROVIDERS_PATH: &str = "/dashboard/providers";

#[derive(Debug, Clone)]
pub struct GetDeveloperProvidersTool;

impl TerraTool for GetDeveloperProvidersTool {
    const NAME: &'static str = "get_developer_providers";
    const DESCRIPTION: &'static str = "Get the providers enabled for the developer account.";

    type Params = NoParams;

    fn build_request(_params: NoParams, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get(PROVIDERS_PATH).query(Params::new().with_opt("dev_id", dev_id))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddProvidersParams {
    #[schemars(description = "List of providers to add (e.g. [\"GARMIN\", \"OURA\"])")]
    pub providers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AddProvidersTool;

impl TerraTool for AddProvidersTool {
    const NAME: &'static str = "add_providers";
    const DESCRIPTION: &'static str = "Add providers to the developer account.";

    type Params = AddProvidersParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::post(PROVIDERS_PATH).body(
            Params::new()
                .with_opt("dev_id", dev_id)
                .with("providers", params.providers),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProviderParams {
    #[schemars(description = "The provider (e.g. 'FITBIT')")]
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct DeactivateProviderTool;

impl TerraTool for DeactivateProviderTool {
    const NAME: &'static str = "deactivate_provider";
    const DESCRIPTION: &'static str = "Deactivate (remove) a provider from the developer account.";

    type Params = ProviderParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::delete(PROVIDERS_PATH).body(
            Params::new()
                .with_opt("dev_id", dev_id)
                .with("provider", params.provider),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetProviderStateParams {
    #[schemars(description = "The provider to update")]
    pub provider: String,

    #[schemars(description = "Whether the provider should be active")]
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SetProviderStateTool;

impl TerraTool for SetProviderStateTool {
    const NAME: &'static str = "set_provider_state";
    const DESCRIPTION: &'static str = "Set provider state (active or inactive).";

    type Params = SetProviderStateParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::patch(PROVIDERS_PATH).body(
            Params::new()
                .with_opt("dev_id", dev_id)
                .with("provider", params.provider)
                .with("active", params.active),
        )
    }
}

#[derive(Debug, Clone)]
pub struct GetProvidersByPopularityTool;

impl TerraTool for GetProvidersByPopularityTool {
    const NAME: &'static str = "get_providers_by_popularity";
    const DESCRIPTION: &'static str = "Get providers ranked by popularity.";

    type Params = NoParams;

    fn build_request(_params: NoParams, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get("/dashboard/providers/ranked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::terra::Method;
    use crate::domains::tools::definitions::common::execute;
    use crate::domains::tools::definitions::common::test_support::mock_client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_get_developer_providers_query() {
        let request = GetDeveloperProvidersTool::build_request(NoParams {}, Some("dev-1"));
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/dashboard/providers");
        assert_eq!(request.query.unwrap().to_json(), json!({ "dev_id": "dev-1" }));
    }

    #[test]
    fn test_add_providers_body_keeps_list() {
        let params: AddProvidersParams =
            serde_json::from_value(json!({ "providers": ["GARMIN", "OURA"] })).unwrap();
        let request = AddProvidersTool::build_request(params, Some("dev-1"));

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body.unwrap().to_json(),
            json!({ "dev_id": "dev-1", "providers": ["GARMIN", "OURA"] })
        );
    }

    #[test]
    fn test_deactivate_provider_is_delete_with_body() {
        let request = DeactivateProviderTool::build_request(
            ProviderParams {
                provider: "FITBIT".into(),
            },
            Some("dev-1"),
        );
        assert_eq!(request.method, Method::Delete);
        assert!(request.query.is_none());
        assert_eq!(
            request.body.unwrap().to_json(),
            json!({ "dev_id": "dev-1", "provider": "FITBIT" })
        );
    }

    #[test]
    fn test_set_provider_state_body() {
        let request = SetProviderStateTool::build_request(
            SetProviderStateParams {
                provider: "WHOOP".into(),
                active: true,
            },
            None,
        );
        assert_eq!(request.method, Method::Patch);
        assert_eq!(
            request.body.unwrap().to_json(),
            json!({ "provider": "WHOOP", "active": true })
        );
    }

    #[test]
    fn test_providers_by_popularity_has_no_params() {
        let request = GetProvidersByPopularityTool::build_request(NoParams {}, Some("dev-1"));
        assert_eq!(request.path, "/dashboard/providers/ranked");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_set_provider_state_end_to_end() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/dashboard/providers")
            .match_header("x-api-key", "test-api-key")
            .match_header("dev-id", "test-dev")
            .match_body(Matcher::Json(json!({
                "dev_id": "test-dev",
                "provider": "POLAR",
                "active": false
            })))
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create();

        let client = mock_client(&server.url());
        let result = execute::<SetProviderStateTool>(
            SetProviderStateParams {
                provider: "POLAR".into(),
                active: false,
            },
            &client,
        );

        assert_eq!(result.is_error, Some(false));
        mock.assert();
    }
}
