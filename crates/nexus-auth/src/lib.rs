//! # nexus-auth
//!
//! Authorization strategies for Globus Nexus clients.
//!
//! ## Security
//!
//! - Passwords, tokens and client secrets are redacted in Debug output
//! - Tracing spans skip credential parameters
//!
//! ## Supported Strategies
//!
//! - **Basic** - username/password, required to mint legacy tokens
//! - **Legacy GOAuth** - `Authorization: Globus-Goauthtoken <token>`
//! - **Access Token** - static Globus Auth bearer token
//! - **Refresh Token** - bearer token renewed from a refresh token
//! - **Client Credentials** - bearer token renewed with a confidential client
//! - **Null** - no `Authorization` header at all
//!
//! ## Example
//!
//! ```rust,ignore
//! use globus_nexus_auth::{Authorizer, BasicAuthorizer, LegacyGoauthAuthorizer};
//!
//! let basic: Authorizer = BasicAuthorizer::new("alice", "hunter2").into();
//! assert!(basic.is_basic());
//!
//! let legacy: Authorizer = LegacyGoauthAuthorizer::new("un=alice|tokenid=...").into();
//! assert!(legacy.is_legacy_goauth());
//! ```

mod authorizer;
mod basic;
mod error;
mod legacy;
mod oauth;
mod renewing;
mod token;

pub use authorizer::{Authorizer, AuthorizerKind, GlobusAuthorizer};
pub use basic::BasicAuthorizer;
pub use error::{Error, ErrorKind, Result};
pub use legacy::LegacyGoauthAuthorizer;
pub use oauth::{AuthClient, TokenResponse};
pub use renewing::{ClientCredentialsAuthorizer, RefreshTokenAuthorizer};
pub use token::{AccessTokenAuthorizer, NullAuthorizer};

/// Scheme name of the legacy Nexus token header.
pub const GOAUTH_SCHEME: &str = "Globus-Goauthtoken";
