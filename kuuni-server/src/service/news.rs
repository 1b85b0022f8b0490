//! News Service
//!
//! Business logic for news article management.

use kuuni_core::domain::news::{NewsArticle, NewsCategory};
use kuuni_core::dto::news::CreateArticle;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::news_repository;

/// Service error type
#[derive(Debug)]
pub enum NewsError {
    NotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for NewsError {
    fn from(err: sqlx::Error) -> Self {
        NewsError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;

/// Create a new article
pub async fn create_article(pool: &PgPool, req: CreateArticle) -> Result<NewsArticle> {
    // Validate request
    validate_article_request(&req)?;

    let article = news_repository::create(pool, req).await?;

    tracing::info!("Article created: {} ({})", article.title, article.id);

    Ok(article)
}

/// Get an article by ID
pub async fn get_article(pool: &PgPool, id: Uuid) -> Result<NewsArticle> {
    let article = news_repository::find_by_id(pool, id)
        .await?
        .ok_or(NewsError::NotFound(id))?;

    Ok(article)
}

/// List articles
///
/// Public callers get published rows only; the admin passes `include_drafts`
/// to see everything. `category` narrows to one editorial category.
pub async fn list_articles(
    pool: &PgPool,
    include_drafts: bool,
    category: Option<NewsCategory>,
) -> Result<Vec<NewsArticle>> {
    let articles = news_repository::list(pool, !include_drafts, category).await?;
    Ok(articles)
}

/// Update an article
pub async fn update_article(pool: &PgPool, id: Uuid, req: CreateArticle) -> Result<NewsArticle> {
    // Validate request
    validate_article_request(&req)?;

    let updated = news_repository::update(pool, id, req).await?;

    if !updated {
        return Err(NewsError::NotFound(id));
    }

    // Return updated article
    get_article(pool, id).await
}

/// Delete an article
pub async fn delete_article(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = news_repository::delete(pool, id).await?;

    if !deleted {
        return Err(NewsError::NotFound(id));
    }

    tracing::info!("Article deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_article_request(req: &CreateArticle) -> Result<()> {
    if req.title.trim().is_empty() {
        return Err(NewsError::ValidationError(
            "Article title cannot be empty".to_string(),
        ));
    }

    if req.title.len() > 255 {
        return Err(NewsError::ValidationError(
            "Article title is too long (max 255 characters)".to_string(),
        ));
    }

    if req.excerpt.trim().is_empty() {
        return Err(NewsError::ValidationError(
            "Article excerpt cannot be empty".to_string(),
        ));
    }

    if req.content.trim().is_empty() {
        return Err(NewsError::ValidationError(
            "Article content cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateArticle {
        CreateArticle {
            title: "Ouverture de la saison touristique".to_string(),
            excerpt: "La saison démarre en mars".to_string(),
            content: "Le ministère annonce l'ouverture officielle...".to_string(),
            image_url: None,
            category: NewsCategory::Annonce,
            published_at: None,
            published: false,
            featured: false,
            author: None,
        }
    }

    #[test]
    fn test_validate_empty_title() {
        let mut req = valid_request();
        req.title = "".to_string();

        let result = validate_article_request(&req);
        assert!(matches!(result, Err(NewsError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_excerpt() {
        let mut req = valid_request();
        req.excerpt = "  ".to_string();

        let result = validate_article_request(&req);
        assert!(matches!(result, Err(NewsError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let result = validate_article_request(&valid_request());
        assert!(result.is_ok());
    }
}
