//! Experience-related API endpoints

use crate::KuuniClient;
use crate::error::Result;
use kuuni_core::domain::experience::Experience;
use kuuni_core::dto::experience::CreateExperience;
use uuid::Uuid;

impl KuuniClient {
    // =============================================================================
    // Experience Management
    // =============================================================================

    /// Create a new experience
    ///
    /// # Arguments
    /// * `req` - The experience creation request
    ///
    /// # Returns
    /// The created experience
    pub async fn create_experience(&self, req: CreateExperience) -> Result<Experience> {
        let url = format!("{}/api/experiences", self.base_url);
        let response = self.with_auth(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List experiences, newest first
    ///
    /// # Arguments
    /// * `featured` - When set, only experiences with a matching featured flag
    pub async fn list_experiences(&self, featured: Option<bool>) -> Result<Vec<Experience>> {
        let url = format!("{}/api/experiences", self.base_url);
        let mut request = self.client.get(&url);

        if let Some(featured) = featured {
            request = request.query(&[("featured", featured)]);
        }

        let response = self.with_auth(request).send().await?;

        self.handle_response(response).await
    }

    /// Get an experience by ID
    pub async fn get_experience(&self, experience_id: Uuid) -> Result<Experience> {
        let url = format!("{}/api/experiences/{}", self.base_url, experience_id);
        let response = self.with_auth(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Update an experience (full-record overwrite)
    pub async fn update_experience(
        &self,
        experience_id: Uuid,
        req: CreateExperience,
    ) -> Result<Experience> {
        let url = format!("{}/api/experiences/{}", self.base_url, experience_id);
        let response = self.with_auth(self.client.put(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Delete an experience
    pub async fn delete_experience(&self, experience_id: Uuid) -> Result<()> {
        let url = format!("{}/api/experiences/{}", self.base_url, experience_id);
        let response = self.with_auth(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
