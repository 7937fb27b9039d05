//! Terra API access.
//!
//! - `request.rs` - request descriptors and the parameter builder
//! - `client.rs` - blocking HTTP client attaching the static headers
//! - `error.rs` - upstream error types

mod client;
mod error;
pub mod request;

pub use client::{CLIENT_USER_AGENT, TerraClient};
pub use error::ApiError;
pub use request::{ApiRequest, Method, Origin, Params};
