//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod booking;
mod experience;
mod login;
mod news;
mod review;

pub use booking::BookingCommands;
pub use experience::ExperienceCommands;
pub use news::NewsCommands;
pub use review::ReviewCommands;

use anyhow::Result;
use clap::Subcommand;
use kuuni_client::KuuniClient;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print a session token
    Login {
        /// Admin username
        #[arg(short, long, default_value = "admin")]
        username: String,

        /// Admin password
        #[arg(short, long, env = "KUUNI_ADMIN_PASSWORD")]
        password: String,
    },
    /// Experience management
    Experience {
        #[command(subcommand)]
        command: ExperienceCommands,
    },
    /// Booking request handling
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// Review moderation
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
    /// News article management
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },
}

/// Build a client from the CLI configuration, carrying the session token
pub fn client(config: &Config) -> KuuniClient {
    let mut client = KuuniClient::new(&config.api_url);
    if let Some(token) = &config.token {
        client.set_token(token);
    }
    client
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            login::handle_login(config, &username, &password).await
        }
        Commands::Experience { command } => {
            experience::handle_experience_command(command, config).await
        }
        Commands::Booking { command } => booking::handle_booking_command(command, config).await,
        Commands::Review { command } => review::handle_review_command(command, config).await,
        Commands::News { command } => news::handle_news_command(command, config).await,
    }
}
