//! Log in with a Globus ID username and password, obtain a legacy GOAuth
//! token, then use that token to fetch the user's own record.
//!
//! Run with: cargo run --example goauth_login

use std::io::{self, BufRead, Write};

use globus_nexus::{BasicAuthorizer, NexusClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; set RUST_LOG=globus_nexus_client=debug for detail
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    print!("Globus ID Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().lock().read_line(&mut username)?;
    let username = username.trim();

    let password = rpassword::prompt_password("Password: ")?;

    let basic_auth_client = NexusClient::new(BasicAuthorizer::new(username, password))?;
    let token = basic_auth_client.get_goauth_token().await?;

    let client = NexusClient::from_legacy_token(&token)?;
    let user = client.get_user(username).await?;
    println!("{}", serde_json::to_string_pretty(user.data())?);

    Ok(())
}
