//! News command handlers
//!
//! Handles news article management: creation from a JSON file, listing,
//! viewing, publishing and unpublishing, updating, and deletion.

use anyhow::{Context, Result, anyhow};
use clap::Subcommand;
use colored::*;
use kuuni_core::domain::news::{NewsArticle, NewsCategory};
use kuuni_core::dto::news::CreateArticle;
use kuuni_client::KuuniClient;

use crate::commands::client;
use crate::config::Config;
use crate::id_resolver::{IdOrPrefix, resolve_article_id};

/// News subcommands
#[derive(Subcommand)]
pub enum NewsCommands {
    /// Create a new article from a JSON file
    Create {
        /// Path to a JSON file describing the article
        #[arg(short, long)]
        file: String,
    },
    /// List articles, drafts included
    List {
        /// Only show published articles, as the public site does
        #[arg(long)]
        published_only: bool,

        /// Only articles in this category (Événement, Tourisme, Culture, Partenariat, Annonce)
        #[arg(long)]
        category: Option<String>,
    },
    /// Get article details
    Get {
        /// Article ID or unambiguous prefix
        id: String,
    },
    /// Publish a draft article
    Publish {
        /// Article ID or unambiguous prefix
        id: String,
    },
    /// Move a published article back to draft
    Unpublish {
        /// Article ID or unambiguous prefix
        id: String,
    },
    /// Update an article from a JSON file (full-record overwrite)
    Update {
        /// Article ID or unambiguous prefix
        id: String,

        /// Path to a JSON file describing the article
        #[arg(short, long)]
        file: String,
    },
    /// Delete an article
    Delete {
        /// Article ID or unambiguous prefix
        id: String,
    },
}

/// Handle news commands
pub async fn handle_news_command(command: NewsCommands, config: &Config) -> Result<()> {
    let client = client(config);

    match command {
        NewsCommands::Create { file } => create_article(&client, &file).await,
        NewsCommands::List {
            published_only,
            category,
        } => list_articles(&client, published_only, category).await,
        NewsCommands::Get { id } => get_article(&client, &id).await,
        NewsCommands::Publish { id } => set_published(&client, &id, true).await,
        NewsCommands::Unpublish { id } => set_published(&client, &id, false).await,
        NewsCommands::Update { id, file } => update_article(&client, &id, &file).await,
        NewsCommands::Delete { id } => delete_article(&client, &id).await,
    }
}

/// Parse a category argument into a NewsCategory
fn parse_category(s: &str) -> Result<NewsCategory> {
    match s {
        "Événement" => Ok(NewsCategory::Evenement),
        "Tourisme" => Ok(NewsCategory::Tourisme),
        "Culture" => Ok(NewsCategory::Culture),
        "Partenariat" => Ok(NewsCategory::Partenariat),
        "Annonce" => Ok(NewsCategory::Annonce),
        other => Err(anyhow!(
            "Unknown category '{}' (expected Événement, Tourisme, Culture, Partenariat, or Annonce)",
            other
        )),
    }
}

/// Read a CreateArticle request from a JSON file
fn read_request(path: &str) -> Result<CreateArticle> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Invalid article JSON in {}", path))
}

/// Rebuild the full-record update request from an existing article
fn to_request(article: &NewsArticle) -> CreateArticle {
    CreateArticle {
        title: article.title.clone(),
        excerpt: article.excerpt.clone(),
        content: article.content.clone(),
        image_url: article.image_url.clone(),
        category: article.category,
        published_at: Some(article.published_at),
        published: article.published,
        featured: article.featured,
        author: article.author.clone(),
    }
}

/// Create a new article from a JSON file
async fn create_article(client: &KuuniClient, file: &str) -> Result<()> {
    let req = read_request(file)?;

    let article = client.create_article(req).await?;

    println!("{}", "✓ Article created successfully!".green().bold());
    print_article_details(&article);

    Ok(())
}

/// List articles
async fn list_articles(
    client: &KuuniClient,
    published_only: bool,
    category: Option<String>,
) -> Result<()> {
    let category = category.as_deref().map(parse_category).transpose()?;
    let articles = client.list_articles(!published_only, category).await?;

    if articles.is_empty() {
        println!("{}", "No articles found.".yellow());
    } else {
        println!("{}", format!("Found {} article(s):", articles.len()).bold());
        println!();
        for article in articles {
            print_article_summary(&article);
        }
    }

    Ok(())
}

/// Get and display a single article
async fn get_article(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_article_id(client, &id_or_prefix).await?;

    let article = client.get_article(uuid).await?;

    print_article_details(&article);

    Ok(())
}

/// Publish or unpublish an article
async fn set_published(client: &KuuniClient, id: &str, published: bool) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_article_id(client, &id_or_prefix).await?;

    let article = client.get_article(uuid).await?;

    let mut req = to_request(&article);
    req.published = published;

    let article = client.update_article(uuid, req).await?;

    if article.published {
        println!(
            "{}",
            format!("✓ Article {} published", article.id).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("✓ Article {} moved back to draft", article.id)
                .yellow()
                .bold()
        );
    }

    Ok(())
}

/// Update an article from a JSON file
async fn update_article(client: &KuuniClient, id: &str, file: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_article_id(client, &id_or_prefix).await?;

    let req = read_request(file)?;
    let article = client.update_article(uuid, req).await?;

    println!("{}", "✓ Article updated successfully!".green().bold());
    print_article_details(&article);

    Ok(())
}

/// Delete an article
async fn delete_article(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_article_id(client, &id_or_prefix).await?;

    client.delete_article(uuid).await?;

    println!(
        "{}",
        format!("✓ Article {} deleted successfully!", uuid)
            .green()
            .bold()
    );

    Ok(())
}

// =============================================================================
// Display Helpers
// =============================================================================

fn print_article_summary(article: &NewsArticle) {
    let state = if article.published {
        "published".green()
    } else {
        "draft".yellow()
    };
    let featured = if article.featured { " ★" } else { "" };

    println!(
        "  {} {} [{}]{}",
        article.id.to_string().cyan(),
        article.title.bold(),
        state,
        featured.yellow()
    );
    println!(
        "    {} · {}",
        article.category.to_string().dimmed(),
        article.published_at.format("%Y-%m-%d").to_string().dimmed()
    );
}

fn print_article_details(article: &NewsArticle) {
    let state = if article.published {
        "published".green()
    } else {
        "draft".yellow()
    };

    println!("  ID:        {}", article.id.to_string().cyan());
    println!("  Title:     {}", article.title.bold());
    println!("  Category:  {}", article.category);
    println!("  State:     {}", state);
    println!("  Published: {}", article.published_at);
    if let Some(author) = &article.author {
        println!("  Author:    {}", author);
    }
    println!("  Featured:  {}", article.featured);
    println!("  {}", article.excerpt.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_labels() {
        assert_eq!(parse_category("Événement").unwrap(), NewsCategory::Evenement);
        assert_eq!(parse_category("Annonce").unwrap(), NewsCategory::Annonce);
    }

    #[test]
    fn test_parse_unknown_category() {
        assert!(parse_category("Sport").is_err());
    }
}
