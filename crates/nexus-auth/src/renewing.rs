//! Bearer-token authorizers that renew their own access token.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::authorizer::GlobusAuthorizer;
use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{AuthClient, TokenResponse};

/// Tokens expiring within this window are renewed ahead of use.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    fn from_response(token: TokenResponse) -> Self {
        let expires_at = token.expires_at(Utc::now());
        Self {
            access_token: token.access_token,
            expires_at,
        }
    }

    fn is_usable(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at
                .checked_sub_signed(TimeDelta::seconds(EXPIRY_MARGIN_SECONDS))
                .is_some_and(|renew_at| renew_at > now),
            None => true,
        }
    }
}

/// Shared token cache. Clones of an authorizer share one cache.
#[derive(Clone, Default)]
struct TokenCache {
    slot: Arc<Mutex<Option<CachedToken>>>,
}

impl TokenCache {
    fn seeded(access_token: Option<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        let cached = access_token.map(|access_token| CachedToken {
            access_token,
            expires_at,
        });
        Self {
            slot: Arc::new(Mutex::new(cached)),
        }
    }

    /// Return a usable bearer header, renewing with `renew` when needed.
    async fn bearer<F, Fut>(&self, renew: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<TokenResponse>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(ref cached) = *slot {
            if cached.is_usable(Utc::now()) {
                return Ok(format!("Bearer {}", cached.access_token));
            }
        }

        debug!("Renewing access token");
        let cached = CachedToken::from_response(renew().await?);
        let header = format!("Bearer {}", cached.access_token);
        *slot = Some(cached);
        Ok(header)
    }

    async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    async fn current(&self) -> Option<String> {
        self.slot
            .lock()
            .await
            .as_ref()
            .map(|cached| cached.access_token.clone())
    }
}

/// Bearer authorization backed by a refresh token.
#[derive(Clone)]
pub struct RefreshTokenAuthorizer {
    refresh_token: String,
    client: AuthClient,
    cache: TokenCache,
}

impl std::fmt::Debug for RefreshTokenAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenAuthorizer")
            .field("refresh_token", &"[REDACTED]")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl RefreshTokenAuthorizer {
    /// Create an authorizer that fetches its first access token on demand.
    pub fn new(refresh_token: impl Into<String>, client: AuthClient) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            client,
            cache: TokenCache::default(),
        }
    }

    /// Seed the authorizer with an access token obtained earlier.
    ///
    /// Without `expires_at` the token is used until the service rejects it.
    pub fn with_access_token(
        mut self,
        access_token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.cache = TokenCache::seeded(Some(access_token.into()), expires_at);
        self
    }

    /// The access token currently cached, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.cache.current().await
    }
}

impl GlobusAuthorizer for RefreshTokenAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        let header = self
            .cache
            .bearer(|| self.client.refresh_token(&self.refresh_token))
            .await?;
        Ok(Some(header))
    }

    async fn handle_missing_authorization(&self) -> bool {
        self.cache.invalidate().await;
        true
    }
}

/// Bearer authorization for a confidential client acting as itself.
#[derive(Clone)]
pub struct ClientCredentialsAuthorizer {
    client: AuthClient,
    scopes: Vec<String>,
    cache: TokenCache,
}

impl std::fmt::Debug for ClientCredentialsAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsAuthorizer")
            .field("client", &self.client)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

impl ClientCredentialsAuthorizer {
    /// Create the authorizer. `client` must carry a client secret.
    pub fn new<I, S>(client: AuthClient, scopes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !client.is_confidential() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "client credentials authorization requires a client secret".to_string(),
            )));
        }
        Ok(Self {
            client,
            scopes: scopes.into_iter().map(Into::into).collect(),
            cache: TokenCache::default(),
        })
    }

    /// Seed the authorizer with an access token obtained earlier.
    pub fn with_access_token(
        mut self,
        access_token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.cache = TokenCache::seeded(Some(access_token.into()), expires_at);
        self
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// The access token currently cached, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.cache.current().await
    }
}

impl GlobusAuthorizer for ClientCredentialsAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        let header = self
            .cache
            .bearer(|| self.client.client_credentials(&self.scopes))
            .await?;
        Ok(Some(header))
    }

    async fn handle_missing_authorization(&self) -> bool {
        self.cache.invalidate().await;
        true
    }
}
