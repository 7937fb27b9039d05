//! Domains module containing business logic organized by bounded contexts.
//!
//! - `terra` is the HTTP client for the Terra REST API and documentation hosts
//! - `tools` exposes Terra operations as MCP tools
//! - `resources` exposes documentation and configuration checks as MCP resources

pub mod resources;
pub mod terra;
pub mod tools;
