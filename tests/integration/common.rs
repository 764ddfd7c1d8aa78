use globus_nexus::{BasicAuthorizer, NexusClient};

fn required_env(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => panic!(
            "\n\n{name} must be set to run integration tests against Globus Nexus.\n\
             Required: GLOBUS_NEXUS_USERNAME, GLOBUS_NEXUS_PASSWORD\n\
             Optional: GLOBUS_NEXUS_GROUP_ID, GLOBUS_SDK_ENVIRONMENT\n\n"
        ),
    }
}

pub fn username() -> String {
    required_env("GLOBUS_NEXUS_USERNAME")
}

/// Group to read from; tests that need one are skipped without it.
pub fn group_id() -> Option<String> {
    std::env::var("GLOBUS_NEXUS_GROUP_ID")
        .ok()
        .filter(|id| !id.is_empty())
}

pub fn basic_client() -> NexusClient {
    let password = required_env("GLOBUS_NEXUS_PASSWORD");
    NexusClient::new(BasicAuthorizer::new(username(), password))
        .expect("Failed to build basic auth client")
}

/// Client authorized with a freshly minted legacy token.
pub async fn legacy_client() -> NexusClient {
    let token = basic_client()
        .get_goauth_token()
        .await
        .expect("Failed to obtain legacy token");
    NexusClient::from_legacy_token(&token).expect("Failed to build legacy client")
}
