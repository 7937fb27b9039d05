//! Provider OAuth key tools. All parameters travel in the query string.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::terra::{ApiRequest, Params};
use crate::domains::tools::definitions::TerraTool;

const PROVIDER_KEYS_PATH: &str = "/dashboard/providerKeys";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetProviderKeysParams {
    #[schemars(description = "The provider resource (e.g. 'GARMIN')")]
    pub resource: String,

    #[schemars(description = "The client ID for the provider")]
    pub client_id: String,

    #[schemars(description = "The client secret for the provider")]
    pub client_secret: String,

    #[schemars(description = "The redirect URL for the provider")]
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SetProviderKeysTool;

impl TerraTool for SetProviderKeysTool {
    const NAME: &'static str = "set_provider_keys";
    const DESCRIPTION: &'static str =
        "Set the OAuth client keys Terra uses for a provider on behalf of the developer.";

    type Params = SetProviderKeysParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::patch(PROVIDER_KEYS_PATH).query(
            Params::new()
                .with("resource", params.resource)
                .with("client_id", params.client_id)
                .with("client_secret", params.client_secret)
                .with_opt("dev_id", dev_id)
                .with_non_empty("redirect_url", params.redirect_url),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProviderKeysParams {
    #[schemars(description = "The provider resource (e.g. 'GARMIN')")]
    pub resource: String,
}

#[derive(Debug, Clone)]
pub struct GetProviderKeysTool;

impl TerraTool for GetProviderKeysTool {
    const NAME: &'static str = "get_provider_keys";
    const DESCRIPTION: &'static str = "Get the OAuth client keys configured for a provider.";

    type Params = GetProviderKeysParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get(PROVIDER_KEYS_PATH).query(
            Params::new()
                .with("resource", params.resource)
                .with_opt("dev_id", dev_id),
        )
    }
}
