//! Kuuni CLI
//!
//! Command-line interface for administering the Kuuni booking platform.

mod commands;
mod config;
mod id_resolver;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "kuuni")]
#[command(about = "Kuuni booking platform admin CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, env = "KUUNI_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Admin session token (obtain one with `kuuni login`)
    #[arg(long, env = "KUUNI_ADMIN_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        token: cli.token,
    };

    handle_command(cli.command, &config).await
}
