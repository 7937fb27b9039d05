//! Terra MCP Server Library
//!
//! A Model Context Protocol server that lets an assistant manage a Terra
//! developer account: integrations, data destinations, provider
//! configuration and custom OAuth credentials, plus a documentation search.
//!
//! # Architecture
//!
//! - **core**: configuration, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **terra**: blocking HTTP client for the Terra API
//!   - **tools**: one MCP tool per Terra endpoint
//!   - **resources**: documentation chunks, credential checks and static text
//!
//! # Example
//!
//! ```rust,no_run
//! use terra_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, McpServer};
