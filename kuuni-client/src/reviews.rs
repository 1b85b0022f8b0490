//! Review-related API endpoints

use crate::KuuniClient;
use crate::error::Result;
use kuuni_core::domain::review::Review;
use kuuni_core::dto::review::{CreateReview, SetReviewApproval};
use uuid::Uuid;

impl KuuniClient {
    // =============================================================================
    // Review Intake & Moderation
    // =============================================================================

    /// Submit a review
    ///
    /// # Returns
    /// The stored review, always unapproved until moderated
    pub async fn create_review(&self, req: CreateReview) -> Result<Review> {
        let url = format!("{}/api/reviews", self.base_url);
        let response = self.with_auth(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List reviews, newest first
    ///
    /// # Arguments
    /// * `experience_id` - When set, only reviews for this experience
    /// * `all` - Include unapproved reviews (the admin moderation queue);
    ///   without it only approved reviews are returned
    pub async fn list_reviews(
        &self,
        experience_id: Option<Uuid>,
        all: bool,
    ) -> Result<Vec<Review>> {
        let url = format!("{}/api/reviews", self.base_url);
        let mut request = self.client.get(&url);

        if let Some(experience_id) = experience_id {
            request = request.query(&[("experience_id", experience_id.to_string())]);
        }

        if all {
            request = request.query(&[("all", true)]);
        }

        let response = self.with_auth(request).send().await?;

        self.handle_response(response).await
    }

    /// Approve or un-approve a review
    pub async fn set_review_approval(&self, review_id: Uuid, approved: bool) -> Result<Review> {
        let url = format!("{}/api/reviews/{}/approval", self.base_url, review_id);
        let response = self
            .with_auth(self.client.put(&url))
            .json(&SetReviewApproval { approved })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a review
    pub async fn delete_review(&self, review_id: Uuid) -> Result<()> {
        let url = format!("{}/api/reviews/{}", self.base_url, review_id);
        let response = self.with_auth(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
