//! List the identity ids of every member of a group.
//!
//! Prompts are written to stderr, so the output can feed a pipeline:
//!
//! ```text
//! cargo run --example list_group_members | xargs globus get-identities
//! ```

use std::io::{self, BufRead, Write};

use globus_nexus::{BasicAuthorizer, NexusClient};

fn prompt(label: &str) -> io::Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let username = prompt("Globus ID Username: ")?;
    let password = rpassword::prompt_password("Password: ")?;
    let group_id = prompt("Globus Group ID: ")?;

    let basic_auth_client = NexusClient::new(BasicAuthorizer::new(&username, password))?;
    let token = basic_auth_client.get_goauth_token().await?;

    let client = NexusClient::from_legacy_token(&token)?;
    let memberships = client.get_group_memberships(&group_id).await?;

    // The members endpoint wraps the array in a {"members": [...]} document
    let members = memberships["members"].as_array().cloned().unwrap_or_default();
    for member in &members {
        if let Some(identity_id) = member["identity_id"].as_str() {
            println!("{}", identity_id);
        }
    }

    Ok(())
}
