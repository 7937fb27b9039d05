//! Destination management tools.
//!
//! A destination is an external sink (S3 bucket, SQL database, webhook...)
//! that Terra forwards processed data to.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::terra::{ApiRequest, Params};
use crate::domains::tools::definitions::{NoParams, TerraTool};

const DESTINATIONS_PATH: &str = "/dashboard/destinations";

/// Connection details shared by the add and ping tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DestinationConnection {
    #[schemars(description = "The destination type (e.g. 's3', 'sql', 'webhook')")]
    pub destination: String,

    #[schemars(description = "The scheme (e.g. 's3', 'postgres', 'https', 'mysql')")]
    pub scheme: String,

    #[schemars(description = "The host (e.g. 'webhook.site', 'eu-west-2', 'localhost')")]
    pub host: String,

    #[schemars(
        description = "The path (e.g. bucket name, database name, webhook path without leading '/')"
    )]
    #[serde(default)]
    pub path: Option<String>,

    #[schemars(description = "Username for credentials")]
    #[serde(default)]
    pub user: Option<String>,

    #[schemars(description = "Password for credentials")]
    #[serde(default)]
    pub password: Option<String>,

    #[schemars(description = "Port for the service if needed")]
    #[serde(default)]
    pub port: Option<u16>,

    #[schemars(description = "Query string if needed")]
    #[serde(default)]
    pub query: Option<String>,

    #[schemars(description = "Certificate for certain destinations like GCS")]
    #[serde(default)]
    pub certificate: Option<String>,
}

impl DestinationConnection {
    fn into_params(self, dev_id: Option<&str>) -> Params {
        Params::new()
            .with("destination", self.destination)
            .with_opt("dev_id", dev_id)
            .with("scheme", self.scheme)
            .with("host", self.host)
            .with_opt("path", self.path)
            .with_opt("user", self.user)
            .with_opt("password", self.password)
            .with_opt("port", self.port)
            .with_opt("query", self.query)
            .with_opt("certificate", self.certificate)
    }
}

/// Lists the developer's destinations.
#[derive(Debug, Clone)]
pub struct GetDestinationsTool;

impl TerraTool for GetDestinationsTool {
    const NAME: &'static str = "get_destinations";
    const DESCRIPTION: &'static str =
        "Get the list of destinations configured for the developer account.";

    type Params = NoParams;

    fn build_request(_params: NoParams, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get(DESTINATIONS_PATH).query(Params::new().with_opt("dev_id", dev_id))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DestinationParams {
    #[schemars(description = "The destination to get credentials for")]
    pub destination: String,
}

/// Credentials stored for one destination.
#[derive(Debug, Clone)]
pub struct GetDestinationCredentialsTool;

impl TerraTool for GetDestinationCredentialsTool {
    const NAME: &'static str = "get_developer_destination_credentials";
    const DESCRIPTION: &'static str = "Get the credentials stored for a developer destination.";

    type Params = DestinationParams;

    fn build_request(params: Self::Params, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::get("/dashboard/destinations/credentials")
            .query(Params::new().with("destination", params.destination))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDestinationParams {
    #[schemars(description = "The destination to delete")]
    pub destination: String,

    #[schemars(description = "Developer ID. If not provided, the configured developer ID is used")]
    #[serde(default)]
    pub dev_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteDestinationTool;

impl TerraTool for DeleteDestinationTool {
    const NAME: &'static str = "delete_destination";
    const DESCRIPTION: &'static str = "Delete a destination from the developer account.";

    type Params = DeleteDestinationParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        let dev_id = params.dev_id.or_else(|| dev_id.map(String::from));
        ApiRequest::delete(DESTINATIONS_PATH).body(
            Params::new()
                .with_opt("dev_id", dev_id)
                .with("destination", params.destination),
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetDestinationStateParams {
    #[schemars(description = "The destination to update")]
    pub destination: String,

    #[schemars(description = "Whether the destination should be active")]
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SetDestinationStateTool;

impl TerraTool for SetDestinationStateTool {
    const NAME: &'static str = "set_destination_state";
    const DESCRIPTION: &'static str = "Set destination state (active or inactive).";

    type Params = SetDestinationStateParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::patch(DESTINATIONS_PATH).body(
            Params::new()
                .with_opt("dev_id", dev_id)
                .with("destination", params.destination)
                .with("active", params.active),
        )
    }
}

fn default_complete_destination() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDeveloperDestinationParams {
    #[serde(flatten)]
    pub connection: DestinationConnection,

    #[schemars(description = "If true, ping the destination before adding it (default: true)")]
    #[serde(default = "default_complete_destination")]
    pub complete_destination: bool,
}

#[derive(Debug, Clone)]
pub struct AddDeveloperDestinationTool;

impl TerraTool for AddDeveloperDestinationTool {
    const NAME: &'static str = "add_developer_destination";
    const DESCRIPTION: &'static str = "Add a destination (S3 bucket, SQL database, webhook, ...) that Terra forwards data to.";

    type Params = AddDeveloperDestinationParams;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::post(DESTINATIONS_PATH).body(
            params
                .connection
                .into_params(dev_id)
                .with("complete_destination", params.complete_destination),
        )
    }
}

#[derive(Debug, Clone)]
pub struct PingDeveloperDestinationTool;

impl TerraTool for PingDeveloperDestinationTool {
    const NAME: &'static str = "ping_developer_destination";
    const DESCRIPTION: &'static str =
        "Ping a developer destination to check whether it is reachable.";

    type Params = DestinationConnection;

    fn build_request(params: Self::Params, dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::post("/dashboard/destinations/ping").body(params.into_params(dev_id))
    }
}
