//! Review API Handlers
//!
//! HTTP endpoints for review intake and moderation.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use kuuni_core::domain::review::Review;
use kuuni_core::dto::review::{CreateReview, SetReviewApproval};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::review_service;

/// POST /api/reviews
/// Create a review from the public form
///
/// The stored review is always unapproved until moderated.
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReview>,
) -> ApiResult<Json<Review>> {
    tracing::info!("Review submission for experience: {}", req.experience_id);

    let review = review_service::create_review(&state.pool, req)
        .await
        .map_err(|e| match e {
            review_service::ReviewError::ValidationError(msg) => ApiError::BadRequest(msg),
            review_service::ReviewError::DatabaseError(err) => ApiError::DatabaseError(err),
            review_service::ReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Review {} not found", id))
            }
        })?;

    Ok(Json(review))
}

/// GET /api/reviews
/// List reviews, newest first
///
/// Query parameters:
/// - `experience_id` (optional): only reviews for this experience
/// - `all` (optional): include unapproved reviews (admin moderation queue);
///   without it only approved reviews are returned
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewsQuery>,
) -> ApiResult<Json<Vec<Review>>> {
    tracing::debug!("Listing reviews");

    let include_unapproved = params.all.unwrap_or(false);

    let reviews = review_service::list_reviews(&state.pool, params.experience_id, include_unapproved)
        .await
        .map_err(|e| match e {
            review_service::ReviewError::DatabaseError(err) => ApiError::DatabaseError(err),
            review_service::ReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Review {} not found", id))
            }
            review_service::ReviewError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(reviews))
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub experience_id: Option<Uuid>,
    pub all: Option<bool>,
}

/// PUT /api/reviews/{id}/approval
/// Approve or un-approve a review
pub async fn set_review_approval(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetReviewApproval>,
) -> ApiResult<Json<Review>> {
    tracing::info!("Setting review {} approval to {}", id, req.approved);

    let review = review_service::set_review_approval(&state.pool, id, req.approved)
        .await
        .map_err(|e| match e {
            review_service::ReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Review {} not found", id))
            }
            review_service::ReviewError::DatabaseError(err) => ApiError::DatabaseError(err),
            review_service::ReviewError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(review))
}

/// DELETE /api/reviews/{id}
/// Delete a review
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting review: {}", id);

    review_service::delete_review(&state.pool, id)
        .await
        .map_err(|e| match e {
            review_service::ReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Review {} not found", id))
            }
            review_service::ReviewError::DatabaseError(err) => ApiError::DatabaseError(err),
            review_service::ReviewError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
