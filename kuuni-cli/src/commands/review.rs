//! Review command handlers
//!
//! Handles the moderation queue: listing reviews, approving or un-approving
//! them, and deletion.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use kuuni_core::domain::review::Review;
use kuuni_client::KuuniClient;

use crate::commands::client;
use crate::config::Config;
use crate::id_resolver::{IdOrPrefix, resolve_experience_id, resolve_review_id};

/// Review subcommands
#[derive(Subcommand)]
pub enum ReviewCommands {
    /// List reviews, including the unapproved moderation queue
    List {
        /// Only reviews for this experience (ID or unambiguous prefix)
        #[arg(long)]
        experience: Option<String>,

        /// Only show approved reviews, as the public site does
        #[arg(long)]
        approved_only: bool,
    },
    /// Approve a review for public display
    Approve {
        /// Review ID or unambiguous prefix
        id: String,
    },
    /// Send a review back to the unapproved queue
    Unapprove {
        /// Review ID or unambiguous prefix
        id: String,
    },
    /// Delete a review
    Delete {
        /// Review ID or unambiguous prefix
        id: String,
    },
}

/// Handle review commands
pub async fn handle_review_command(command: ReviewCommands, config: &Config) -> Result<()> {
    let client = client(config);

    match command {
        ReviewCommands::List {
            experience,
            approved_only,
        } => list_reviews(&client, experience, approved_only).await,
        ReviewCommands::Approve { id } => set_approval(&client, &id, true).await,
        ReviewCommands::Unapprove { id } => set_approval(&client, &id, false).await,
        ReviewCommands::Delete { id } => delete_review(&client, &id).await,
    }
}

/// List reviews
async fn list_reviews(
    client: &KuuniClient,
    experience: Option<String>,
    approved_only: bool,
) -> Result<()> {
    let experience_id = match experience {
        Some(id) => {
            let id_or_prefix = IdOrPrefix::parse(&id);
            Some(resolve_experience_id(client, &id_or_prefix).await?)
        }
        None => None,
    };

    let reviews = client.list_reviews(experience_id, !approved_only).await?;

    if reviews.is_empty() {
        println!("{}", "No reviews found.".yellow());
    } else {
        println!("{}", format!("Found {} review(s):", reviews.len()).bold());
        println!();
        for review in reviews {
            print_review_summary(&review);
        }
    }

    Ok(())
}

/// Approve or un-approve a review
async fn set_approval(client: &KuuniClient, id: &str, approved: bool) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_review_id(client, &id_or_prefix).await?;

    let review = client.set_review_approval(uuid, approved).await?;

    if review.approved {
        println!(
            "{}",
            format!("✓ Review {} approved for publication", review.id)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("✓ Review {} moved back to the queue", review.id)
                .yellow()
                .bold()
        );
    }

    Ok(())
}

/// Delete a review
async fn delete_review(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_review_id(client, &id_or_prefix).await?;

    client.delete_review(uuid).await?;

    println!(
        "{}",
        format!("✓ Review {} deleted successfully!", uuid)
            .green()
            .bold()
    );

    Ok(())
}

// =============================================================================
// Display Helpers
// =============================================================================

fn print_review_summary(review: &Review) {
    let stars = "★".repeat(review.rating.clamp(0, 5) as usize);
    let state = if review.approved {
        "approved".green()
    } else {
        "pending".yellow()
    };

    println!(
        "  {} {} {} [{}]",
        review.id.to_string().cyan(),
        review.author_name.bold(),
        stars.yellow(),
        state
    );
    println!(
        "    {} · {}",
        review.experience_title.dimmed(),
        review.comment.dimmed()
    );
}
