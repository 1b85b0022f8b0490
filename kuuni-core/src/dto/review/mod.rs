//! Review DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public review form submission
///
/// The approved flag is not part of the request: submissions always enter
/// moderation unapproved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    pub experience_id: Uuid,
    pub experience_title: String,
    pub author_name: String,
    pub author_email: String,
    pub rating: i32,
    pub comment: String,
}

/// Admin request to approve or un-approve a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetReviewApproval {
    pub approved: bool,
}
