//! Custom provider credential tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::terra::{ApiRequest, Params};
use crate::domains::tools::definitions::TerraTool;

const CREDENTIALS_PATH: &str = "/dashboard/providers/credentials";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddCustomCredentialsParams {
    #[schemars(description = "The provider to add credentials for")]
    pub provider: String,

    #[schemars(description = "The client ID")]
    pub client_id: String,

    #[schemars(description = "The client secret")]
    pub client_secret: String,

    #[schemars(description = "The redirect URL")]
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddCustomCredentialsTool;

impl TerraTool for AddCustomCredentialsTool {
    const NAME: &'static str = "add_custom_credentials";
    const DESCRIPTION: &'static str = "Add custom OAuth credentials for a provider.";

    type Params = AddCustomCredentialsParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::post(CREDENTIALS_PATH).body(
            Params::new()
                .with("provider", params.provider)
                .with("client_id", params.client_id)
                .with("client_secret", params.client_secret)
                .with_opt("dev_id", dev_id)
                .with_non_empty("redirect_url", params.redirect_url),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCustomCredentialsParams {
    #[schemars(description = "The provider to get credentials for")]
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct GetCustomCredentialsTool;

impl TerraTool for GetCustomCredentialsTool {
    const NAME: &'static str = "get_custom_credentials";
    const DESCRIPTION: &'static str = "Get the custom credentials stored for a provider.";

    type Params = GetCustomCredentialsParams;

    fn build_request(params: Self::Params, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get(CREDENTIALS_PATH).query(Params::new().with("provider", params.provider))
    }
}
