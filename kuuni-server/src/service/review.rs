//! Review Service
//!
//! Business logic for review intake and moderation.

use kuuni_core::domain::review::Review;
use kuuni_core::dto::review::CreateReview;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::review_repository;

/// Service error type
#[derive(Debug)]
pub enum ReviewError {
    NotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ReviewError {
    fn from(err: sqlx::Error) -> Self {
        ReviewError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Create a new review from the public form
///
/// The stored row is always unapproved until an admin approves it.
pub async fn create_review(pool: &PgPool, req: CreateReview) -> Result<Review> {
    // Validate request
    validate_review_request(&req)?;

    let review = review_repository::create(pool, req).await?;

    tracing::info!(
        "Review received from {} for {} ({})",
        review.author_name,
        review.experience_title,
        review.id
    );

    Ok(review)
}

/// List reviews
///
/// Public callers get approved rows only; the admin passes
/// `include_unapproved` to see the moderation queue.
pub async fn list_reviews(
    pool: &PgPool,
    experience_id: Option<Uuid>,
    include_unapproved: bool,
) -> Result<Vec<Review>> {
    let reviews = review_repository::list(pool, experience_id, !include_unapproved).await?;
    Ok(reviews)
}

/// Approve or un-approve a review
pub async fn set_review_approval(pool: &PgPool, id: Uuid, approved: bool) -> Result<Review> {
    let updated = review_repository::update_approval(pool, id, approved).await?;

    if !updated {
        return Err(ReviewError::NotFound(id));
    }

    tracing::info!("Review {} approval set to {}", id, approved);

    let review = review_repository::find_by_id(pool, id)
        .await?
        .ok_or(ReviewError::NotFound(id))?;

    Ok(review)
}

/// Delete a review
pub async fn delete_review(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = review_repository::delete(pool, id).await?;

    if !deleted {
        return Err(ReviewError::NotFound(id));
    }

    tracing::info!("Review deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_review_request(req: &CreateReview) -> Result<()> {
    if req.author_name.trim().is_empty() {
        return Err(ReviewError::ValidationError(
            "Author name cannot be empty".to_string(),
        ));
    }

    if req.author_email.trim().is_empty() {
        return Err(ReviewError::ValidationError(
            "Author email cannot be empty".to_string(),
        ));
    }

    if req.comment.trim().is_empty() {
        return Err(ReviewError::ValidationError(
            "Comment cannot be empty".to_string(),
        ));
    }

    // Rating is stored as submitted, without a range check

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateReview {
        CreateReview {
            experience_id: Uuid::new_v4(),
            experience_title: "Atelier de teinture".to_string(),
            author_name: "Issa Ouédraogo".to_string(),
            author_email: "issa@example.com".to_string(),
            rating: 5,
            comment: "Une très belle découverte".to_string(),
        }
    }

    #[test]
    fn test_validate_empty_author_name() {
        let mut req = valid_request();
        req.author_name = " ".to_string();

        let result = validate_review_request(&req);
        assert!(matches!(result, Err(ReviewError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_comment() {
        let mut req = valid_request();
        req.comment = "".to_string();

        let result = validate_review_request(&req);
        assert!(matches!(result, Err(ReviewError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let result = validate_review_request(&valid_request());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rating_not_range_checked() {
        let mut req = valid_request();
        req.rating = 17;
        assert!(validate_review_request(&req).is_ok());

        req.rating = -1;
        assert!(validate_review_request(&req).is_ok());
    }
}
