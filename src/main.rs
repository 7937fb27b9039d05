//! Terra MCP server entry point.
//!
//! Loads configuration, initializes logging on stderr and serves MCP over the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use terra_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    for warning in &config.warnings {
        warn!("{warning}");
    }
    if config.credentials.api_key.is_none() {
        warn!("TERRA_API_KEY is not set; Terra API calls will be rejected");
    }
    if config.credentials.dev_id.is_none() {
        warn!("TERRA_DEV_ID is not set; dashboard tools will omit dev_id");
    }

    let server = McpServer::new(config.clone());

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Logs go to stderr; stdout carries the stdio protocol stream.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
