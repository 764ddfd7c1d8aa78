//! Globus Nexus API client.
//!
//! `NexusClient` attaches the Nexus headers and authorization to each
//! request; the operations themselves live in the submodules.

use serde_json::Value;
use tracing::{debug, warn};

use globus_nexus_auth::{Authorizer, GlobusAuthorizer, LegacyGoauthAuthorizer};
use globus_nexus_transport::{ClientConfig, GlobusHttpClient, RequestBuilder, RequestMethod};

use crate::error::Result;
use crate::response::{NexusArrayResponse, NexusResponse};

mod goauth;
mod groups;
mod memberships;

/// Header naming the identity a request acts as.
pub const ACTIVE_IDENTITY_HEADER: &str = "X-Globus-Active-Identity";

/// Service name used to resolve the default base URL.
pub const SERVICE_NAME: &str = "nexus";

/// Globus Nexus API client.
///
/// Paths are built by plain interpolation of group ids and usernames;
/// callers must pass identifiers that are already URL-safe.
///
/// # Example
///
/// ```rust,ignore
/// use globus_nexus_client::{BasicAuthorizer, NexusClient};
///
/// let basic = NexusClient::new(BasicAuthorizer::new("alice", password))?;
/// let token = basic.get_goauth_token().await?;
///
/// let client = NexusClient::from_legacy_token(&token)?;
/// let user = client.get_user("alice").await?;
/// println!("{}", user["email"]);
/// ```
#[derive(Debug, Clone)]
pub struct NexusClient {
    http: GlobusHttpClient,
    base_url: String,
    authorizer: Authorizer,
    active_identity: Option<String>,
}

impl NexusClient {
    /// Create a client for the Nexus service of the current environment.
    ///
    /// See [`globus_nexus_transport::service_url`] for how the base URL is
    /// resolved.
    pub fn new(authorizer: impl Into<Authorizer>) -> Result<Self> {
        let base_url = globus_nexus_transport::service_url(SERVICE_NAME)?;
        Self::with_base_url(base_url, authorizer)
    }

    /// Create a client for an explicit base URL.
    ///
    /// HTTP settings come from [`ClientConfig::from_env`].
    pub fn with_base_url(
        base_url: impl Into<String>,
        authorizer: impl Into<Authorizer>,
    ) -> Result<Self> {
        Self::with_config(base_url, authorizer, ClientConfig::from_env()?)
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        authorizer: impl Into<Authorizer>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url).map_err(globus_nexus_transport::Error::from)?;

        Ok(Self {
            http: GlobusHttpClient::new(config)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorizer: authorizer.into(),
            active_identity: None,
        })
    }

    /// Create a client authorized with a legacy Nexus token.
    pub fn from_legacy_token(legacy_token: impl AsRef<str>) -> Result<Self> {
        Self::new(LegacyGoauthAuthorizer::new(legacy_token))
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    /// The identity sent in `X-Globus-Active-Identity`, if any.
    pub fn active_identity(&self) -> Option<&str> {
        self.active_identity.as_deref()
    }

    /// Act as `identity_id` on all subsequent requests.
    pub fn set_active_identity(&mut self, identity_id: impl Into<String>) {
        self.active_identity = Some(identity_id.into());
    }

    /// Stop sending `X-Globus-Active-Identity`.
    pub fn clear_active_identity(&mut self) {
        self.active_identity = None;
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with the Nexus headers and current authorization.
    async fn build_request(&self, method: RequestMethod, path: &str) -> Result<RequestBuilder> {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(value) = self.authorizer.authorization_header().await? {
            request = request.authorization(value);
        }
        if let Some(ref identity) = self.active_identity {
            request = request.header(ACTIVE_IDENTITY_HEADER, identity.as_str());
        }
        Ok(request)
    }

    /// Send one request and decode the JSON body.
    async fn send(
        &self,
        method: RequestMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<NexusResponse> {
        let mut request = self.build_request(method, path).await?.query_pairs(query);
        if let Some(body) = body {
            request = request.json_value(body);
        }

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                if err.is_auth_error() && self.authorizer.handle_missing_authorization().await {
                    warn!(
                        authorizer = %self.authorizer.kind(),
                        "Request unauthorized; authorizer will renew on next call"
                    );
                }
                return Err(err.into());
            }
        };

        let status = response.status();
        let data = response.json_or_null().await?;
        Ok(NexusResponse::new(status, data))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<NexusResponse> {
        self.send(RequestMethod::Get, path, Vec::new(), None).await
    }

    pub(crate) async fn get_array(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<NexusArrayResponse> {
        let response = self.send(RequestMethod::Get, path, query, None).await?;
        debug!(items = response.data().as_array().map(Vec::len), "Array response");
        Ok(response.into())
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<NexusResponse> {
        self.send(RequestMethod::Post, path, Vec::new(), Some(body))
            .await
    }

    pub(crate) async fn put(&self, path: &str, body: Value) -> Result<NexusResponse> {
        self.send(RequestMethod::Put, path, Vec::new(), Some(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<NexusResponse> {
        self.send(RequestMethod::Delete, path, Vec::new(), None)
            .await
    }
}
