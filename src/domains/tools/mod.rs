//! Tools domain module.
//!
//! Each tool forwards one call to the Terra API.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool definitions (`TerraTool` implementations) and shared plumbing
//! - `registry.rs` - The fixed tool catalogue and by-name dispatch
//! - `router.rs` - rmcp ToolRouter built from the catalogue
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `TerraTool` in a file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add `entry::<MyTool>()` to `ToolRegistry::entries()`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{ToolEntry, ToolRegistry};
pub use router::build_tool_router;
