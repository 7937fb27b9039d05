//! Core infrastructure: configuration, the MCP server handler and the
//! transport layer.

pub mod config;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
