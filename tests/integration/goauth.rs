use super::common::{basic_client, legacy_client, username};

#[tokio::test]
#[ignore = "requires GLOBUS_NEXUS_USERNAME and GLOBUS_NEXUS_PASSWORD"]
async fn test_integration_goauth_token_exchange() {
    let token = basic_client()
        .get_goauth_token()
        .await
        .expect("get_goauth_token should succeed");

    assert!(!token.is_empty());
    assert!(
        token.contains(&format!("un={}", username())),
        "legacy token should name the user"
    );
    println!("✓ Obtained legacy token");
}

#[tokio::test]
#[ignore = "requires GLOBUS_NEXUS_USERNAME and GLOBUS_NEXUS_PASSWORD"]
async fn test_integration_get_user() {
    let client = legacy_client().await;
    let user = client
        .get_user(&username())
        .await
        .expect("get_user should succeed");

    assert_eq!(user["username"], username().as_str());
    println!("✓ Fetched user {}", user["username"]);
}
