//! News article DTOs

use serde::{Deserialize, Serialize};

use crate::domain::news::NewsCategory;

/// Request to create a news article, also used for full-record updates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: NewsCategory,
    /// Defaults to the time of creation when absent
    #[serde(default)]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author: Option<String>,
}
