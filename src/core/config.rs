//! Configuration management for the Terra MCP server.
//!
//! Configuration is read once at startup (`Config::from_env`) and then shared
//! read-only as `Arc<Config>` by the server, the tool routes and the resource
//! service.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default Terra API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.tryterra.co/v2";

/// Default origin of the documentation search function.
pub const DEFAULT_DOCS_SEARCH_URL: &str =
    "https://ubd7f3f36wgejf3kvci5647fby0ueuvi.lambda-url.eu-west-1.on.aws";

/// Default base of the minified llms.txt documentation chunks.
pub const DEFAULT_DOCS_BASE_URL: &str =
    "https://raw.githubusercontent.com/tryterra/llms.txt/refs/heads/master/chunked";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Terra API credentials.
    pub credentials: CredentialsConfig,

    /// Terra API endpoints and client settings.
    pub api: ApiConfig,

    /// Problems found while loading, logged once logging is initialized.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Terra API credentials, sent as static headers on every authenticated call.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Value of the `X-API-Key` header (`TERRA_API_KEY`).
    pub api_key: Option<String>,

    /// Value of the `dev-id` header and default `dev_id` parameter (`TERRA_DEV_ID`).
    pub dev_id: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("dev_id", &self.dev_id)
            .finish()
    }
}

/// Upstream endpoints and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the Terra REST API, without trailing slash.
    pub base_url: String,

    /// Origin of the AI documentation search function.
    pub docs_search_url: String,

    /// Base URL of the plain-text documentation chunks.
    pub docs_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            docs_search_url: DEFAULT_DOCS_SEARCH_URL.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Terra Dashboard MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
            warnings: Vec::new(),
        }
    }
}

/// A timeout must be a whole number of seconds greater than zero.
fn parse_timeout(value: &str) -> Option<u64> {
    value.trim().parse().ok().filter(|secs| *secs > 0)
}

/// Read an environment variable, treating empty values as unset.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_value("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = env_value("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.credentials.api_key = env_value("TERRA_API_KEY");
        config.credentials.dev_id = env_value("TERRA_DEV_ID");

        if let Some(url) = env_value("MCP_TERRA_BASE_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(url) = env_value("MCP_TERRA_DOCS_SEARCH_URL") {
            config.api.docs_search_url = url;
        }

        if let Some(url) = env_value("MCP_TERRA_DOCS_BASE_URL") {
            config.api.docs_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = env_value("MCP_TERRA_TIMEOUT_SECS") {
            match parse_timeout(&timeout) {
                Some(secs) => config.api.timeout_secs = secs,
                None => config.warnings.push(format!(
                    "Ignoring invalid MCP_TERRA_TIMEOUT_SECS '{timeout}', using {DEFAULT_TIMEOUT_SECS}s"
                )),
            }
        }

        config
    }
}
