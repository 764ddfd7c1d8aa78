//! HTTP basic authorization.

use base64::Engine;

use crate::authorizer::GlobusAuthorizer;
use crate::error::Result;

/// Username/password authorization (`Authorization: Basic ...`).
///
/// Nexus only mints legacy tokens for callers using this strategy.
#[derive(Clone)]
pub struct BasicAuthorizer {
    username: String,
    header_value: String,
}

impl std::fmt::Debug for BasicAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthorizer")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicAuthorizer {
    /// Create a basic authorizer.
    pub fn new(username: impl Into<String>, password: impl AsRef<str>) -> Self {
        let username = username.into();
        let header_value = basic_header_value(&username, password.as_ref());
        Self {
            username,
            header_value,
        }
    }

    /// The username this authorizer presents.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl GlobusAuthorizer for BasicAuthorizer {
    async fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(self.header_value.clone()))
    }
}

/// `Basic base64(user:secret)`.
pub(crate) fn basic_header_value(user: &str, secret: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, secret));
    format!("Basic {}", encoded)
}
