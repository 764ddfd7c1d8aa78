//! # globus-nexus
//!
//! A client library for the Globus Nexus groups and identity API.
//!
//! ## Security
//!
//! - Passwords, tokens and client secrets are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **globus-nexus-transport** - HTTP plumbing: configuration, environments, error mapping
//! - **globus-nexus-auth** - Authorization: basic, legacy GOAuth tokens, bearer, refresh, client credentials
//! - **globus-nexus-client** - Nexus API: legacy tokens, users, groups, memberships
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use globus_nexus::{BasicAuthorizer, NexusClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Exchange a password for a legacy token (store it, it is long lived)
//!     let basic = NexusClient::new(BasicAuthorizer::new("alice", "hunter2"))?;
//!     let token = basic.get_goauth_token().await?;
//!
//!     let client = NexusClient::from_legacy_token(&token)?;
//!     let members = client.get_group_memberships("c4d0e1a2-...").await?;
//!
//!     for member in &members {
//!         println!("{}", member["identity_id"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use globus_nexus_auth as auth;
#[cfg(feature = "client")]
pub use globus_nexus_client as client;
#[cfg(feature = "transport")]
pub use globus_nexus_transport as transport;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use globus_nexus_auth::{
    AccessTokenAuthorizer, AuthClient, Authorizer, BasicAuthorizer, ClientCredentialsAuthorizer,
    GlobusAuthorizer, LegacyGoauthAuthorizer, NullAuthorizer, RefreshTokenAuthorizer,
};
#[cfg(feature = "client")]
pub use globus_nexus_client::{
    BlockingNexusClient, Error, ErrorKind, GroupTreeParams, ListGroupsParams,
    NexusArrayResponse, NexusClient, NexusResponse, Result, StringOrList,
};
#[cfg(feature = "transport")]
pub use globus_nexus_transport::ClientConfig;
