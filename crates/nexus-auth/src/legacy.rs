//! Legacy Nexus ("GOAuth") token authorization.

use crate::authorizer::GlobusAuthorizer;
use crate::error::Result;
use crate::GOAUTH_SCHEME;

/// Sends `Authorization: Globus-Goauthtoken <token>` on every request.
///
/// The token is not validated, refreshed or re-encoded. Legacy tokens are
/// long lived; obtain one with `NexusClient::get_goauth_token` and store it.
#[derive(Clone)]
pub struct LegacyGoauthAuthorizer {
    header_value: String,
}

impl std::fmt::Debug for LegacyGoauthAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyGoauthAuthorizer")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl LegacyGoauthAuthorizer {
    /// Create an authorizer from a legacy token string.
    pub fn new(legacy_token: impl AsRef<str>) -> Self {
        Self {
            header_value: format!("{} {}", GOAUTH_SCHEME, legacy_token.as_ref()),
        }
    }

    /// The full header value.
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

impl GlobusAuthorizer for LegacyGoauthAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(self.header_value.clone()))
    }
}
