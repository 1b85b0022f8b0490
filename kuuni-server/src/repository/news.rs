//! News Repository
//!
//! Handles all database operations related to news articles.

use kuuni_core::domain::news::{NewsArticle, NewsCategory};
use kuuni_core::dto::news::CreateArticle;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new article in the database
///
/// When no publish date is supplied, the creation time is used.
pub async fn create(pool: &PgPool, req: CreateArticle) -> Result<NewsArticle, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();
    let published_at = req.published_at.unwrap_or(now);

    let article = NewsArticle {
        id,
        title: req.title.clone(),
        excerpt: req.excerpt.clone(),
        content: req.content.clone(),
        image_url: req.image_url.clone(),
        category: req.category,
        published_at,
        published: req.published,
        featured: req.featured,
        author: req.author.clone(),
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO news (
            id, title, excerpt, content, image_url, category, published_at,
            published, featured, author, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.excerpt)
    .bind(&req.content)
    .bind(&req.image_url)
    .bind(category_to_string(req.category))
    .bind(published_at)
    .bind(req.published)
    .bind(req.featured)
    .bind(&req.author)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(article)
}

/// Find an article by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<NewsArticle>, sqlx::Error> {
    let row = sqlx::query_as::<_, NewsRow>(
        r#"
        SELECT id, title, excerpt, content, image_url, category, published_at,
               published, featured, author, created_at
        FROM news
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List articles by publish date, newest first
///
/// When `only_published` is set, drafts are never returned; the public
/// listing always sets it. `category` narrows to one editorial category.
pub async fn list(
    pool: &PgPool,
    only_published: bool,
    category: Option<NewsCategory>,
) -> Result<Vec<NewsArticle>, sqlx::Error> {
    let rows = sqlx::query_as::<_, NewsRow>(
        r#"
        SELECT id, title, excerpt, content, image_url, category, published_at,
               published, featured, author, created_at
        FROM news
        WHERE (NOT $1 OR published = TRUE)
          AND ($2::text IS NULL OR category = $2)
        ORDER BY published_at DESC
        "#,
    )
    .bind(only_published)
    .bind(category.map(category_to_string))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Update an article (full-record overwrite)
pub async fn update(pool: &PgPool, id: Uuid, req: CreateArticle) -> Result<bool, sqlx::Error> {
    let published_at = req.published_at.unwrap_or_else(chrono::Utc::now);

    let result = sqlx::query(
        r#"
        UPDATE news
        SET title = $1, excerpt = $2, content = $3, image_url = $4,
            category = $5, published_at = $6, published = $7, featured = $8,
            author = $9
        WHERE id = $10
        "#,
    )
    .bind(&req.title)
    .bind(&req.excerpt)
    .bind(&req.content)
    .bind(&req.image_url)
    .bind(category_to_string(req.category))
    .bind(published_at)
    .bind(req.published)
    .bind(req.featured)
    .bind(&req.author)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an article by ID
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Helper Functions
// =============================================================================

fn category_to_string(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Evenement => "Événement",
        NewsCategory::Tourisme => "Tourisme",
        NewsCategory::Culture => "Culture",
        NewsCategory::Partenariat => "Partenariat",
        NewsCategory::Annonce => "Annonce",
    }
}

fn string_to_category(s: &str) -> NewsCategory {
    match s {
        "Événement" => NewsCategory::Evenement,
        "Tourisme" => NewsCategory::Tourisme,
        "Culture" => NewsCategory::Culture,
        "Partenariat" => NewsCategory::Partenariat,
        _ => NewsCategory::Annonce,
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct NewsRow {
    id: Uuid,
    title: String,
    excerpt: String,
    content: String,
    image_url: Option<String>,
    category: String,
    published_at: chrono::DateTime<chrono::Utc>,
    published: bool,
    featured: bool,
    author: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<NewsRow> for NewsArticle {
    fn from(row: NewsRow) -> Self {
        NewsArticle {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            image_url: row.image_url,
            category: string_to_category(&row.category),
            published_at: row.published_at,
            published: row.published,
            featured: row.featured,
            author: row.author,
            created_at: row.created_at,
        }
    }
}
