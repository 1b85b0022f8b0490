//! Experience command handlers
//!
//! Handles all experience-related CLI commands including creation from a JSON
//! file, listing, viewing, updating, and deletion.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use kuuni_core::domain::experience::Experience;
use kuuni_core::dto::experience::CreateExperience;
use kuuni_client::KuuniClient;

use crate::commands::client;
use crate::config::Config;
use crate::id_resolver::{IdOrPrefix, resolve_experience_id};

/// Experience subcommands
#[derive(Subcommand)]
pub enum ExperienceCommands {
    /// Create a new experience from a JSON file
    Create {
        /// Path to a JSON file describing the experience
        #[arg(short, long)]
        file: String,
    },
    /// List experiences
    List {
        /// Only show featured experiences
        #[arg(long)]
        featured: bool,
    },
    /// Get experience details
    Get {
        /// Experience ID or unambiguous prefix
        id: String,
    },
    /// Update an experience from a JSON file (full-record overwrite)
    Update {
        /// Experience ID or unambiguous prefix
        id: String,

        /// Path to a JSON file describing the experience
        #[arg(short, long)]
        file: String,
    },
    /// Delete an experience
    Delete {
        /// Experience ID or unambiguous prefix
        id: String,
    },
}

/// Handle experience commands
///
/// Routes experience subcommands to their respective handlers.
pub async fn handle_experience_command(
    command: ExperienceCommands,
    config: &Config,
) -> Result<()> {
    let client = client(config);

    match command {
        ExperienceCommands::Create { file } => create_experience(&client, &file).await,
        ExperienceCommands::List { featured } => list_experiences(&client, featured).await,
        ExperienceCommands::Get { id } => get_experience(&client, &id).await,
        ExperienceCommands::Update { id, file } => update_experience(&client, &id, &file).await,
        ExperienceCommands::Delete { id } => delete_experience(&client, &id).await,
    }
}

/// Read a CreateExperience request from a JSON file
fn read_request(path: &str) -> Result<CreateExperience> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Invalid experience JSON in {}", path))
}

/// Create a new experience from a JSON file
async fn create_experience(client: &KuuniClient, file: &str) -> Result<()> {
    let req = read_request(file)?;

    let experience = client.create_experience(req).await?;

    println!("{}", "✓ Experience created successfully!".green().bold());
    print_experience_details(&experience);

    Ok(())
}

/// List experiences
async fn list_experiences(client: &KuuniClient, featured: bool) -> Result<()> {
    let filter = if featured { Some(true) } else { None };
    let experiences = client.list_experiences(filter).await?;

    if experiences.is_empty() {
        println!("{}", "No experiences found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} experience(s):", experiences.len()).bold()
        );
        println!();
        for experience in experiences {
            print_experience_summary(&experience);
        }
    }

    Ok(())
}

/// Get and display a single experience
async fn get_experience(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_experience_id(client, &id_or_prefix).await?;

    let experience = client.get_experience(uuid).await?;

    print_experience_details(&experience);

    Ok(())
}

/// Update an experience from a JSON file
async fn update_experience(client: &KuuniClient, id: &str, file: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_experience_id(client, &id_or_prefix).await?;

    let req = read_request(file)?;
    let experience = client.update_experience(uuid, req).await?;

    println!("{}", "✓ Experience updated successfully!".green().bold());
    print_experience_details(&experience);

    Ok(())
}

/// Delete an experience
async fn delete_experience(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_experience_id(client, &id_or_prefix).await?;

    client.delete_experience(uuid).await?;

    println!(
        "{}",
        format!("✓ Experience {} deleted successfully!", uuid)
            .green()
            .bold()
    );

    Ok(())
}

// =============================================================================
// Display Helpers
// =============================================================================

fn print_experience_summary(experience: &Experience) {
    let featured = if experience.featured { " ★" } else { "" };
    println!(
        "  {} {}{}",
        experience.id.to_string().cyan(),
        experience.title.bold(),
        featured.yellow()
    );
    println!(
        "    {} · {} · {} FCFA · {}",
        experience.city.to_string().dimmed(),
        experience.kind.to_string().dimmed(),
        experience.price.to_string().dimmed(),
        experience.duration.dimmed()
    );
}

fn print_experience_details(experience: &Experience) {
    println!("  ID:        {}", experience.id.to_string().cyan());
    println!("  Title:     {}", experience.title.bold());
    println!("  City:      {}", experience.city);
    println!("  Kind:      {}", experience.kind);
    println!("  Category:  {}", experience.category);
    if let Some(group) = &experience.group {
        println!("  Group:     {}", group);
    }
    println!("  Price:     {} FCFA", experience.price);
    println!("  Duration:  {}", experience.duration);
    println!("  Featured:  {}", experience.featured);
    println!("  Created:   {}", experience.created_at);
    println!("  {}", experience.description.dimmed());
}
