use tracing::{debug, instrument, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::response::NexusResponse;

impl super::NexusClient {
    /// Exchange basic credentials for a legacy Nexus token.
    ///
    /// Requires a [`BasicAuthorizer`](globus_nexus_auth::BasicAuthorizer).
    /// Legacy tokens are long lived and should be stored and reused.
    #[instrument(skip(self))]
    pub async fn get_goauth_token(&self) -> Result<String> {
        if !self.authorizer.is_basic() {
            return Err(Error::new(ErrorKind::Authorization(format!(
                "get_goauth_token requires basic authorization, client uses {}",
                self.authorizer.kind()
            ))));
        }

        let response = self.get("/goauth/token?grant_type=client_credentials").await?;
        match response.get("access_token").and_then(|v| v.as_str()) {
            Some(token) => {
                debug!("Legacy token obtained");
                Ok(token.to_string())
            }
            None => {
                warn!(
                    status = response.http_status(),
                    "Token response has no access_token"
                );
                Err(Error::new(ErrorKind::UnexpectedResponse {
                    status: response.http_status(),
                    body: response.into_data(),
                }))
            }
        }
    }

    /// Fetch a user record.
    ///
    /// Requires a [`LegacyGoauthAuthorizer`](globus_nexus_auth::LegacyGoauthAuthorizer).
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<NexusResponse> {
        if !self.authorizer.is_legacy_goauth() {
            return Err(Error::new(ErrorKind::Authorization(format!(
                "get_user requires legacy goauth authorization (Nexus tokens), client uses {}",
                self.authorizer.kind()
            ))));
        }
        self.get(&format!("/users/{}", username)).await
    }
}
