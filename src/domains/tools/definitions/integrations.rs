//! Integration catalogue tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{NoParams, TerraTool};
use crate::domains::terra::{ApiRequest, Params};

/// Lists the integrations Terra supports.
#[derive(Debug, Clone)]
pub struct GetIntegrationsTool;

impl TerraTool for GetIntegrationsTool {
    const NAME: &'static str = "get_integrations";
    const DESCRIPTION: &'static str =
        "Get list of available integrations. Returns the list of available integrations in JSON format.";

    type Params = NoParams;

    fn build_request(_params: NoParams, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get("/integrations")
    }
}

/// Parameters for the detailed integrations listing.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetDetailedIntegrationsParams {
    /// If true, allows SDK integrations to be included in the response.
    #[schemars(description = "If true, allows SDK integrations to be included in the response")]
    #[serde(default)]
    pub sdk: Option<bool>,
}

/// Detailed integrations, filtered by the developer's enabled integrations.
#[derive(Debug, Clone)]
pub struct GetDetailedIntegrationsTool;

impl TerraTool for GetDetailedIntegrationsTool {
    const NAME: &'static str = "get_detailed_integrations";
    const DESCRIPTION: &'static str = "Retrieve a detailed list of supported integrations, filtered by the developer's enabled integrations and the requirement for SDK usage. Returns JSON.";

    type Params = GetDetailedIntegrationsParams;

    fn build_request(params: Self::Params, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get("/integrations/detailed").query(Params::new().with_opt("sdk", params.sdk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::terra::Method;
    use serde_json::json;

    #[test]
    fn test_get_integrations_request() {
        let request = GetIntegrationsTool::build_request(NoParams {}, Some("dev"));
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/integrations");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_detailed_integrations_without_sdk() {
        let params: GetDetailedIntegrationsParams = serde_json::from_value(json!({})).unwrap();
        let request = GetDetailedIntegrationsTool::build_request(params, None);

        let query = request.query.unwrap();
        assert!(!query.contains_key("sdk"));
        assert!(query.is_empty());
    }

    #[test]
    fn test_detailed_integrations_with_sdk() {
        let params: GetDetailedIntegrationsParams =
            serde_json::from_value(json!({ "sdk": true })).unwrap();
        let request = GetDetailedIntegrationsTool::build_request(params, None);

        assert_eq!(request.path, "/integrations/detailed");
        let query = request.query.unwrap();
        assert_eq!(query.get("sdk"), Some(&json!(true)));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_detailed_integrations_null_sdk_is_absent() {
        let params: GetDetailedIntegrationsParams =
            serde_json::from_value(json!({ "sdk": null })).unwrap();
        let request = GetDetailedIntegrationsTool::build_request(params, None);
        assert!(request.query.unwrap().is_empty());
    }
}
