//! Globus Auth token endpoint client.
//!
//! Only the two grants that renewing authorizers need are supported:
//! `refresh_token` and `client_credentials`.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use globus_nexus_transport::{ClientConfig, GlobusHttpClient};

use crate::basic::basic_header_value;
use crate::error::{Error, ErrorKind, Result};

/// Client for the Globus Auth `/v2/oauth2/token` endpoint.
///
/// A client with a secret is confidential and authenticates with HTTP basic
/// auth; without one it is a native app and sends `client_id` in the form.
#[derive(Clone)]
pub struct AuthClient {
    client_id: String,
    client_secret: Option<String>,
    base_url: String,
    http: GlobusHttpClient,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AuthClient {
    /// Create a client for the Globus Auth service of the current environment.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        let base_url = globus_nexus_transport::service_url("auth")?;
        let http = GlobusHttpClient::new(ClientConfig::from_env()?)?;
        Ok(Self {
            client_id: client_id.into(),
            client_secret: None,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Set the client secret, making this a confidential client.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Point the client at a different Auth service URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns true if a client secret is configured.
    pub fn is_confidential(&self) -> bool {
        self.client_secret.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange a refresh token for a new access token.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse> {
        self.token_request(vec![
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", refresh_token.to_string()),
        ])
        .await
    }

    /// Request tokens for `scopes` with the client credentials grant.
    #[instrument(skip(self))]
    pub async fn client_credentials(&self, scopes: &[String]) -> Result<TokenResponse> {
        if !self.is_confidential() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "client credentials grant requires a client secret".to_string(),
            )));
        }
        self.token_request(vec![
            ("grant_type", "client_credentials".to_string()),
            ("scope", scopes.join(" ")),
        ])
        .await
    }

    async fn token_request(&self, mut form: Vec<(&'static str, String)>) -> Result<TokenResponse> {
        let url = format!("{}/v2/oauth2/token", self.base_url);
        let mut request = self.http.post(url);

        match self.client_secret {
            Some(ref secret) => {
                request = request.authorization(basic_header_value(&self.client_id, secret));
            }
            None => form.push(("client_id", self.client_id.clone())),
        }

        let request = request.form(form).header("Accept", "application/json");
        let token: TokenResponse = self.http.send_json(request).await?;
        tracing::debug!(
            resource_server = token.resource_server.as_deref().unwrap_or_default(),
            expires_in = token.expires_in,
            "Token obtained"
        );
        Ok(token)
    }
}

/// Token response from Globus Auth.
///
/// Token values are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Refresh token (if requested).
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Resource server the access token is for.
    #[serde(default)]
    pub resource_server: Option<String>,
    /// Tokens for additional resource servers.
    #[serde(default)]
    pub other_tokens: Vec<serde_json::Value>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .field("resource_server", &self.resource_server)
            .field("other_tokens", &self.other_tokens.len())
            .finish()
    }
}

impl TokenResponse {
    /// When the access token expires, counting from `issued_at`.
    ///
    /// A lifetime too large to represent is treated as no expiry.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
    }
}
