//! News article domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An editorial post shown on the partner-ministry page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    /// Short summary shown in listings
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: NewsCategory,
    pub published_at: chrono::DateTime<chrono::Utc>,
    /// false = draft, hidden from the public listing
    pub published: bool,
    pub featured: bool,
    pub author: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Editorial categories, displayed in French on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsCategory {
    #[serde(rename = "Événement")]
    Evenement,
    #[serde(rename = "Tourisme")]
    Tourisme,
    #[serde(rename = "Culture")]
    Culture,
    #[serde(rename = "Partenariat")]
    Partenariat,
    #[serde(rename = "Annonce")]
    Annonce,
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsCategory::Evenement => write!(f, "Événement"),
            NewsCategory::Tourisme => write!(f, "Tourisme"),
            NewsCategory::Culture => write!(f, "Culture"),
            NewsCategory::Partenariat => write!(f, "Partenariat"),
            NewsCategory::Annonce => write!(f, "Annonce"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_carries_french_label() {
        assert_eq!(
            serde_json::to_string(&NewsCategory::Evenement).unwrap(),
            "\"Événement\""
        );

        let parsed: NewsCategory = serde_json::from_str("\"Partenariat\"").unwrap();
        assert_eq!(parsed, NewsCategory::Partenariat);
    }

    #[test]
    fn test_display_matches_wire_label() {
        assert_eq!(NewsCategory::Evenement.to_string(), "Événement");
        assert_eq!(NewsCategory::Annonce.to_string(), "Annonce");
    }
}
