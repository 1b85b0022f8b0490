//! ID resolver module
//!
//! Handles resolution of UUID prefixes to full UUIDs by querying the API.
//! This allows admins to specify short, unambiguous prefixes instead of full
//! UUIDs when managing records.

use anyhow::{Context, Result, anyhow};
use kuuni_client::KuuniClient;
use uuid::Uuid;

/// Identifier that can be either a full UUID or an unambiguous prefix
#[derive(Debug, Clone)]
pub enum IdOrPrefix {
    /// Full UUID
    Full(Uuid),
    /// Prefix that should uniquely identify a record
    Prefix(String),
}

impl IdOrPrefix {
    /// Parse a string into an IdOrPrefix
    ///
    /// Attempts to parse as a full UUID first, otherwise treats as a prefix
    pub fn parse(input: &str) -> Self {
        if let Ok(uuid) = Uuid::parse_str(input) {
            IdOrPrefix::Full(uuid)
        } else {
            IdOrPrefix::Prefix(input.to_string())
        }
    }
}

/// Pick the single UUID matching a prefix
fn pick_match(kind: &str, ids: Vec<Uuid>, prefix: &str) -> Result<Uuid> {
    let matches: Vec<_> = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(prefix))
        .collect();

    match matches.len() {
        0 => Err(anyhow!("No {} found with ID starting with '{}'", kind, prefix)),
        1 => Ok(matches[0]),
        _ => {
            let ids: Vec<String> = matches.iter().map(|id| id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple {}s: {}",
                prefix,
                kind,
                ids.join(", ")
            ))
        }
    }
}

/// Resolve an experience ID or prefix to a full UUID
pub async fn resolve_experience_id(client: &KuuniClient, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    let prefix = match id_or_prefix {
        IdOrPrefix::Full(uuid) => return Ok(*uuid),
        IdOrPrefix::Prefix(prefix) => prefix.to_lowercase(),
    };

    let experiences = client
        .list_experiences(None)
        .await
        .context("Failed to fetch experiences for ID resolution")?;

    pick_match(
        "experience",
        experiences.iter().map(|e| e.id).collect(),
        &prefix,
    )
}

/// Resolve a booking ID or prefix to a full UUID
pub async fn resolve_booking_id(client: &KuuniClient, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    let prefix = match id_or_prefix {
        IdOrPrefix::Full(uuid) => return Ok(*uuid),
        IdOrPrefix::Prefix(prefix) => prefix.to_lowercase(),
    };

    let bookings = client
        .list_bookings(None)
        .await
        .context("Failed to fetch bookings for ID resolution")?;

    pick_match("booking", bookings.iter().map(|b| b.id).collect(), &prefix)
}

/// Resolve a review ID or prefix to a full UUID
pub async fn resolve_review_id(client: &KuuniClient, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    let prefix = match id_or_prefix {
        IdOrPrefix::Full(uuid) => return Ok(*uuid),
        IdOrPrefix::Prefix(prefix) => prefix.to_lowercase(),
    };

    let reviews = client
        .list_reviews(None, true)
        .await
        .context("Failed to fetch reviews for ID resolution")?;

    pick_match("review", reviews.iter().map(|r| r.id).collect(), &prefix)
}

/// Resolve a news article ID or prefix to a full UUID
pub async fn resolve_article_id(client: &KuuniClient, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    let prefix = match id_or_prefix {
        IdOrPrefix::Full(uuid) => return Ok(*uuid),
        IdOrPrefix::Prefix(prefix) => prefix.to_lowercase(),
    };

    let articles = client
        .list_articles(true, None)
        .await
        .context("Failed to fetch articles for ID resolution")?;

    pick_match("article", articles.iter().map(|a| a.id).collect(), &prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_uuid() {
        let uuid = Uuid::new_v4();
        let parsed = IdOrPrefix::parse(&uuid.to_string());
        assert!(matches!(parsed, IdOrPrefix::Full(u) if u == uuid));
    }

    #[test]
    fn test_parse_prefix() {
        let parsed = IdOrPrefix::parse("3fa9");
        assert!(matches!(parsed, IdOrPrefix::Prefix(p) if p == "3fa9"));
    }

    #[test]
    fn test_pick_match_unique() {
        let target: Uuid = "3fa9c1aa-0000-4000-8000-000000000000".parse().unwrap();
        let other: Uuid = "77100000-0000-4000-8000-000000000000".parse().unwrap();

        let picked = pick_match("experience", vec![target, other], "3fa9").unwrap();
        assert_eq!(picked, target);
    }

    #[test]
    fn test_pick_match_ambiguous() {
        let a: Uuid = "3fa9c1aa-0000-4000-8000-000000000000".parse().unwrap();
        let b: Uuid = "3fa90000-0000-4000-8000-000000000000".parse().unwrap();

        let result = pick_match("experience", vec![a, b], "3fa9");
        assert!(result.is_err());
    }

    #[test]
    fn test_pick_match_none() {
        let a: Uuid = "3fa9c1aa-0000-4000-8000-000000000000".parse().unwrap();

        let result = pick_match("experience", vec![a], "beef");
        assert!(result.is_err());
    }
}
