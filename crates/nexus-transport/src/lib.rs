//! # nexus-transport
//!
//! HTTP transport layer shared by the Globus Nexus client crates.
//!
//! This crate provides:
//! - Client configuration (timeouts, connection pooling, compression)
//! - Service URL resolution for Globus environments
//! - Request building with verbatim `Authorization` headers
//! - Response handling and Globus error document mapping
//! - Request/response tracing
//!
//! Requests are sent exactly once. There is no retry or backoff at this layer;
//! every failure is returned to the caller as-is.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (nexus-client: groups, memberships, users, goauth)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GlobusHttpClient                         │
//! │  - Raw HTTP over reqwest                                    │
//! │  - Request building, error document mapping                 │
//! │  - Response handling                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use globus_nexus_transport::{ClientConfig, GlobusHttpClient};
//!
//! let http = GlobusHttpClient::new(ClientConfig::default())?;
//! let request = http
//!     .get("https://nexus.api.globusonline.org/groups")
//!     .authorization("Globus-Goauthtoken abc123");
//! let groups: serde_json::Value = http.send_json(request).await?;
//! ```

mod client;
mod config;
pub mod environment;
mod error;
mod request;
mod response;

pub use client::GlobusHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, HTTP_TIMEOUT_VAR, VERIFY_SSL_VAR};
pub use environment::{service_url, service_url_for};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("globus-nexus/", env!("CARGO_PKG_VERSION"));
