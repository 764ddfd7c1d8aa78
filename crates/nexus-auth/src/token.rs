//! Static bearer token and no-op authorization.

use crate::authorizer::GlobusAuthorizer;
use crate::error::Result;

/// Sends a fixed Globus Auth access token as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct AccessTokenAuthorizer {
    access_token: String,
}

impl std::fmt::Debug for AccessTokenAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenAuthorizer")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl AccessTokenAuthorizer {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl GlobusAuthorizer for AccessTokenAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(format!("Bearer {}", self.access_token)))
    }
}

/// Sends no `Authorization` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuthorizer;

impl GlobusAuthorizer for NullAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        Ok(None)
    }
}
