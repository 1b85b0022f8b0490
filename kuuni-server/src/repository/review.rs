//! Review Repository
//!
//! Handles all database operations related to reviews.

use kuuni_core::domain::review::Review;
use kuuni_core::dto::review::CreateReview;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new review in the database
///
/// Public submissions always enter moderation unapproved.
pub async fn create(pool: &PgPool, req: CreateReview) -> Result<Review, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let review = Review {
        id,
        experience_id: req.experience_id,
        experience_title: req.experience_title.clone(),
        author_name: req.author_name.clone(),
        author_email: req.author_email.clone(),
        rating: req.rating,
        comment: req.comment.clone(),
        approved: false,
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO reviews (
            id, experience_id, experience_title, author_name, author_email,
            rating, comment, approved, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(req.experience_id)
    .bind(&req.experience_title)
    .bind(&req.author_name)
    .bind(&req.author_email)
    .bind(req.rating)
    .bind(&req.comment)
    .bind(false)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(review)
}

/// Find a review by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Review>, sqlx::Error> {
    let row = sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, experience_id, experience_title, author_name, author_email,
               rating, comment, approved, created_at
        FROM reviews
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List reviews, newest first
///
/// `experience_id` narrows to one experience. When `only_approved` is set,
/// unapproved rows are never returned; the public listing always sets it.
pub async fn list(
    pool: &PgPool,
    experience_id: Option<Uuid>,
    only_approved: bool,
) -> Result<Vec<Review>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, experience_id, experience_title, author_name, author_email,
               rating, comment, approved, created_at
        FROM reviews
        WHERE ($1::uuid IS NULL OR experience_id = $1)
          AND (NOT $2 OR approved = TRUE)
        ORDER BY created_at DESC
        "#,
    )
    .bind(experience_id)
    .bind(only_approved)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Approve or un-approve a review
pub async fn update_approval(pool: &PgPool, id: Uuid, approved: bool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE reviews
        SET approved = $1
        WHERE id = $2
        "#,
    )
    .bind(approved)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a review by ID
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    experience_id: Uuid,
    experience_title: String,
    author_name: String,
    author_email: String,
    rating: i32,
    comment: String,
    approved: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            experience_id: row.experience_id,
            experience_title: row.experience_title,
            author_name: row.author_name,
            author_email: row.author_email,
            rating: row.rating,
            comment: row.comment,
            approved: row.approved,
            created_at: row.created_at,
        }
    }
}
