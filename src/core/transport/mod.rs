//! Transport layer for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): the standard MCP channel
//! - **HTTP** (feature `http`): JSON-RPC over POST, served with axum
//!
//! Both hand requests to the same `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
