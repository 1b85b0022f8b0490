//! Login command handler
//!
//! Obtains an admin session token and prints it for reuse.

use anyhow::Result;
use colored::*;

use crate::commands::client;
use crate::config::Config;

/// Log in and print the session token
pub async fn handle_login(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = client(config);

    let session = client.login(username, password).await?;

    println!("{}", format!("✓ {}", session.message).green().bold());
    println!("  Token: {}", session.token.cyan());
    println!();
    println!(
        "{}",
        format!("export KUUNI_ADMIN_TOKEN={}", session.token).dimmed()
    );

    Ok(())
}
