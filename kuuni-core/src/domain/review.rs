//! Review domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer feedback on an experience
///
/// Reviews are gated: `approved` stays false until an admin flips it, and the
/// public listing only ever returns approved rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub experience_title: String,
    pub author_name: String,
    pub author_email: String,
    /// Intended range 1-5, stored as submitted
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
