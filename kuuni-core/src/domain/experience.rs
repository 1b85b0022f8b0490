//! Experience domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable tourism offering (tour, meal, workshop, ...)
///
/// Structure shared between the server (persists) and clients (display).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub city: City,
    pub kind: ExperienceKind,
    pub category: String,
    /// Optional grouping label (e.g. "Spa", "Culture", "Gastronomie")
    pub group: Option<String>,
    /// Price in integer currency units. Deliberately unchecked.
    pub price: i64,
    /// Free text, e.g. "2 heures" or "Demi-journée"
    pub duration: String,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
    pub included: Vec<String>,
    pub not_included: Vec<String>,
    pub featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The two towns the operator serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Ouagadougou")]
    Ouagadougou,
    #[serde(rename = "Bobo-Dioulasso")]
    BoboDioulasso,
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            City::Ouagadougou => write!(f, "Ouagadougou"),
            City::BoboDioulasso => write!(f, "Bobo-Dioulasso"),
        }
    }
}

/// Whether an offering is a full experience or a standalone activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Experience,
    Activity,
}

impl std::fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceKind::Experience => write!(f, "experience"),
            ExperienceKind::Activity => write!(f, "activity"),
        }
    }
}
