//! News API Handlers
//!
//! HTTP endpoints for news article management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use kuuni_core::domain::news::{NewsArticle, NewsCategory};
use kuuni_core::dto::news::CreateArticle;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::news_service;

/// POST /api/news
/// Create a news article
pub async fn create_article(
    State(state): State<AppState>,
    Json(req): Json<CreateArticle>,
) -> ApiResult<Json<NewsArticle>> {
    tracing::info!("Creating article: {}", req.title);

    let article = news_service::create_article(&state.pool, req)
        .await
        .map_err(|e| match e {
            news_service::NewsError::ValidationError(msg) => ApiError::BadRequest(msg),
            news_service::NewsError::DatabaseError(err) => ApiError::DatabaseError(err),
            news_service::NewsError::NotFound(id) => {
                ApiError::NotFound(format!("Article {} not found", id))
            }
        })?;

    Ok(Json(article))
}

/// GET /api/news
/// List articles by publish date, newest first
///
/// Query parameters:
/// - `all` (optional): include drafts (admin); without it only published
///   articles are returned
/// - `published` (optional): force the published-only filter even with `all`
/// - `category` (optional): only articles in this category
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> ApiResult<Json<Vec<NewsArticle>>> {
    tracing::debug!("Listing articles");

    let include_drafts = params.all.unwrap_or(false) && !params.published.unwrap_or(false);

    let articles = news_service::list_articles(&state.pool, include_drafts, params.category)
        .await
        .map_err(|e| match e {
            news_service::NewsError::DatabaseError(err) => ApiError::DatabaseError(err),
            news_service::NewsError::NotFound(id) => {
                ApiError::NotFound(format!("Article {} not found", id))
            }
            news_service::NewsError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(articles))
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub all: Option<bool>,
    pub published: Option<bool>,
    pub category: Option<NewsCategory>,
}

/// GET /api/news/{id}
/// Get article by ID
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<NewsArticle>> {
    tracing::debug!("Getting article: {}", id);

    let article = news_service::get_article(&state.pool, id)
        .await
        .map_err(|e| match e {
            news_service::NewsError::NotFound(id) => {
                ApiError::NotFound(format!("Article {} not found", id))
            }
            news_service::NewsError::DatabaseError(err) => ApiError::DatabaseError(err),
            news_service::NewsError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(article))
}

/// PUT /api/news/{id}
/// Update an article (full-record overwrite)
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateArticle>,
) -> ApiResult<Json<NewsArticle>> {
    tracing::info!("Updating article: {}", id);

    let article = news_service::update_article(&state.pool, id, req)
        .await
        .map_err(|e| match e {
            news_service::NewsError::NotFound(id) => {
                ApiError::NotFound(format!("Article {} not found", id))
            }
            news_service::NewsError::ValidationError(msg) => ApiError::BadRequest(msg),
            news_service::NewsError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(article))
}

/// DELETE /api/news/{id}
/// Delete an article
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting article: {}", id);

    news_service::delete_article(&state.pool, id)
        .await
        .map_err(|e| match e {
            news_service::NewsError::NotFound(id) => {
                ApiError::NotFound(format!("Article {} not found", id))
            }
            news_service::NewsError::DatabaseError(err) => ApiError::DatabaseError(err),
            news_service::NewsError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
