//! Experience DTOs

use serde::{Deserialize, Serialize};

use crate::domain::experience::{City, ExperienceKind};

/// Request to create an experience, also used for full-record updates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExperience {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub city: City,
    pub kind: ExperienceKind,
    pub category: String,
    #[serde(default)]
    pub group: Option<String>,
    pub price: i64,
    pub duration: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub not_included: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}
