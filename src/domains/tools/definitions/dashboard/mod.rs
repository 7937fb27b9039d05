//! Terra dashboard tools.
//!
//! - `destinations`: list, add, ping, toggle and delete data destinations
//! - `providers`: enable, rank, toggle and deactivate providers
//! - `provider_keys`: OAuth client keys per provider
//! - `credentials`: custom provider credentials

pub mod credentials;
pub mod destinations;
pub mod provider_keys;
pub mod providers;

pub use credentials::{AddCustomCredentialsTool, GetCustomCredentialsTool};
pub use destinations::{
    AddDeveloperDestinationTool, DeleteDestinationTool, GetDestinationCredentialsTool,
    GetDestinationsTool, PingDeveloperDestinationTool, SetDestinationStateTool,
};
pub use provider_keys::{GetProviderKeysTool, SetProviderKeysTool};
pub use providers::{
    AddProvidersTool, DeactivateProviderTool, GetDeveloperProvidersTool,
    GetProvidersByPopularityTool, SetProviderStateTool,
};
