//! News-related API endpoints

use crate::KuuniClient;
use crate::error::Result;
use kuuni_core::domain::news::{NewsArticle, NewsCategory};
use kuuni_core::dto::news::CreateArticle;
use uuid::Uuid;

impl KuuniClient {
    // =============================================================================
    // News Article Management
    // =============================================================================

    /// Create a news article
    pub async fn create_article(&self, req: CreateArticle) -> Result<NewsArticle> {
        let url = format!("{}/api/news", self.base_url);
        let response = self.with_auth(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List articles by publish date, newest first
    ///
    /// # Arguments
    /// * `all` - Include drafts (admin); without it only published articles
    /// * `category` - When set, only articles in this category
    pub async fn list_articles(
        &self,
        all: bool,
        category: Option<NewsCategory>,
    ) -> Result<Vec<NewsArticle>> {
        let url = format!("{}/api/news", self.base_url);
        let mut request = self.client.get(&url);

        if all {
            request = request.query(&[("all", true)]);
        }

        if let Some(category) = category {
            request = request.query(&[("category", category.to_string())]);
        }

        let response = self.with_auth(request).send().await?;

        self.handle_response(response).await
    }

    /// Get an article by ID
    pub async fn get_article(&self, article_id: Uuid) -> Result<NewsArticle> {
        let url = format!("{}/api/news/{}", self.base_url, article_id);
        let response = self.with_auth(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Update an article (full-record overwrite)
    pub async fn update_article(&self, article_id: Uuid, req: CreateArticle) -> Result<NewsArticle> {
        let url = format!("{}/api/news/{}", self.base_url, article_id);
        let response = self.with_auth(self.client.put(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Delete an article
    pub async fn delete_article(&self, article_id: Uuid) -> Result<()> {
        let url = format!("{}/api/news/{}", self.base_url, article_id);
        let response = self.with_auth(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
