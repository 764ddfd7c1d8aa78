//! The authorization capability and the tagged set of strategies.

use std::future::Future;

use crate::basic::BasicAuthorizer;
use crate::error::Result;
use crate::legacy::LegacyGoauthAuthorizer;
use crate::renewing::{ClientCredentialsAuthorizer, RefreshTokenAuthorizer};
use crate::token::{AccessTokenAuthorizer, NullAuthorizer};

/// A strategy producing the `Authorization` header for outgoing requests.
pub trait GlobusAuthorizer: Send + Sync {
    /// The exact `Authorization` header value, or `None` to send no header.
    fn authorization_header(&self) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Called after the service answered 401.
    ///
    /// Returns true if the strategy dropped state so that the next
    /// [`authorization_header`](Self::authorization_header) call yields a
    /// different credential.
    fn handle_missing_authorization(&self) -> impl Future<Output = bool> + Send {
        async { false }
    }
}

/// Discriminant of an [`Authorizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizerKind {
    Basic,
    LegacyGoauth,
    AccessToken,
    RefreshToken,
    ClientCredentials,
    Null,
}

impl std::fmt::Display for AuthorizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthorizerKind::Basic => "basic",
            AuthorizerKind::LegacyGoauth => "legacy goauth",
            AuthorizerKind::AccessToken => "access token",
            AuthorizerKind::RefreshToken => "refresh token",
            AuthorizerKind::ClientCredentials => "client credentials",
            AuthorizerKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// One of the supported authorization strategies.
///
/// A client holds exactly one of these for its lifetime.
#[derive(Debug, Clone)]
pub enum Authorizer {
    Basic(BasicAuthorizer),
    LegacyGoauth(LegacyGoauthAuthorizer),
    AccessToken(AccessTokenAuthorizer),
    RefreshToken(RefreshTokenAuthorizer),
    ClientCredentials(ClientCredentialsAuthorizer),
    Null(NullAuthorizer),
}

impl Authorizer {
    /// Which strategy this is.
    pub fn kind(&self) -> AuthorizerKind {
        match self {
            Authorizer::Basic(_) => AuthorizerKind::Basic,
            Authorizer::LegacyGoauth(_) => AuthorizerKind::LegacyGoauth,
            Authorizer::AccessToken(_) => AuthorizerKind::AccessToken,
            Authorizer::RefreshToken(_) => AuthorizerKind::RefreshToken,
            Authorizer::ClientCredentials(_) => AuthorizerKind::ClientCredentials,
            Authorizer::Null(_) => AuthorizerKind::Null,
        }
    }

    /// Returns true for username/password authorization.
    pub fn is_basic(&self) -> bool {
        matches!(self, Authorizer::Basic(_))
    }

    /// Returns true for legacy Nexus token authorization.
    pub fn is_legacy_goauth(&self) -> bool {
        matches!(self, Authorizer::LegacyGoauth(_))
    }
}

impl Default for Authorizer {
    fn default() -> Self {
        Authorizer::Null(NullAuthorizer)
    }
}

impl GlobusAuthorizer for Authorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        match self {
            Authorizer::Basic(a) => a.authorization_header().await,
            Authorizer::LegacyGoauth(a) => a.authorization_header().await,
            Authorizer::AccessToken(a) => a.authorization_header().await,
            Authorizer::RefreshToken(a) => a.authorization_header().await,
            Authorizer::ClientCredentials(a) => a.authorization_header().await,
            Authorizer::Null(a) => a.authorization_header().await,
        }
    }

    async fn handle_missing_authorization(&self) -> bool {
        match self {
            Authorizer::RefreshToken(a) => a.handle_missing_authorization().await,
            Authorizer::ClientCredentials(a) => a.handle_missing_authorization().await,
            _ => false,
        }
    }
}

impl From<BasicAuthorizer> for Authorizer {
    fn from(a: BasicAuthorizer) -> Self {
        Authorizer::Basic(a)
    }
}

impl From<LegacyGoauthAuthorizer> for Authorizer {
    fn from(a: LegacyGoauthAuthorizer) -> Self {
        Authorizer::LegacyGoauth(a)
    }
}

impl From<AccessTokenAuthorizer> for Authorizer {
    fn from(a: AccessTokenAuthorizer) -> Self {
        Authorizer::AccessToken(a)
    }
}

impl From<RefreshTokenAuthorizer> for Authorizer {
    fn from(a: RefreshTokenAuthorizer) -> Self {
        Authorizer::RefreshToken(a)
    }
}

impl From<ClientCredentialsAuthorizer> for Authorizer {
    fn from(a: ClientCredentialsAuthorizer) -> Self {
        Authorizer::ClientCredentials(a)
    }
}

impl From<NullAuthorizer> for Authorizer {
    fn from(a: NullAuthorizer) -> Self {
        Authorizer::Null(a)
    }
}
