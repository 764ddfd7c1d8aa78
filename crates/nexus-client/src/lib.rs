//! # nexus-client
//!
//! Client for the Globus Nexus groups and identity API.
//!
//! ## Features
//!
//! - **Legacy tokens** - exchange basic credentials for a long-lived
//!   `Globus-Goauthtoken` and fetch users with it
//! - **Groups** - get, create, update, delete, list and walk group trees
//! - **Memberships** - list, get, invite and update group members
//! - **Active identity** - act as one of the caller's linked identities
//! - **Blocking facade** - [`BlockingNexusClient`] for synchronous callers
//!
//! Requests are sent exactly once. Errors from the service or the network
//! are returned unmodified as [`ErrorKind::Transport`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use globus_nexus_client::{BasicAuthorizer, ListGroupsParams, NexusClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), globus_nexus_client::Error> {
//!     let basic = NexusClient::new(BasicAuthorizer::new("alice", "hunter2"))?;
//!     let token = basic.get_goauth_token().await?;
//!
//!     let client = NexusClient::from_legacy_token(&token)?;
//!     let groups = client
//!         .list_groups(&ListGroupsParams::new().my_roles(["admin", "manager"]))
//!         .await?;
//!     for group in &groups {
//!         println!("{}", group["name"]);
//!     }
//!     Ok(())
//! }
//! ```

mod blocking;
mod client;
mod error;
mod params;
mod response;

pub use blocking::BlockingNexusClient;
pub use client::{NexusClient, ACTIVE_IDENTITY_HEADER, SERVICE_NAME};
pub use error::{Error, ErrorKind, Result};
pub use params::{GroupTreeParams, ListGroupsParams, StringOrList};
pub use response::{NexusArrayResponse, NexusResponse};

// Re-export the authorizers so most callers need only this crate
pub use globus_nexus_auth::{
    AccessTokenAuthorizer, AuthClient, Authorizer, AuthorizerKind, BasicAuthorizer,
    ClientCredentialsAuthorizer, LegacyGoauthAuthorizer, NullAuthorizer, RefreshTokenAuthorizer,
};
pub use globus_nexus_transport::ClientConfig;
