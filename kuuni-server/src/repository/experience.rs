//! Experience Repository
//!
//! Handles all database operations related to experiences.

use kuuni_core::domain::experience::{City, Experience, ExperienceKind};
use kuuni_core::dto::experience::CreateExperience;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new experience in the database
pub async fn create(pool: &PgPool, req: CreateExperience) -> Result<Experience, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let experience = Experience {
        id,
        title: req.title.clone(),
        description: req.description.clone(),
        long_description: req.long_description.clone(),
        city: req.city,
        kind: req.kind,
        category: req.category.clone(),
        group: req.group.clone(),
        price: req.price,
        duration: req.duration.clone(),
        images: req.images.clone(),
        highlights: req.highlights.clone(),
        included: req.included.clone(),
        not_included: req.not_included.clone(),
        featured: req.featured,
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO experiences (
            id, title, description, long_description, city, kind, category,
            group_name, price, duration, images, highlights, included,
            not_included, featured, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        "#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.long_description)
    .bind(city_to_string(req.city))
    .bind(kind_to_string(req.kind))
    .bind(&req.category)
    .bind(&req.group)
    .bind(req.price)
    .bind(&req.duration)
    .bind(&req.images)
    .bind(&req.highlights)
    .bind(&req.included)
    .bind(&req.not_included)
    .bind(req.featured)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(experience)
}

/// Find an experience by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Experience>, sqlx::Error> {
    let row = sqlx::query_as::<_, ExperienceRow>(
        r#"
        SELECT id, title, description, long_description, city, kind, category,
               group_name, price, duration, images, highlights, included,
               not_included, featured, created_at
        FROM experiences
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List experiences, newest first
///
/// When `featured` is set, only rows with a matching featured flag are
/// returned.
pub async fn list(pool: &PgPool, featured: Option<bool>) -> Result<Vec<Experience>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExperienceRow>(
        r#"
        SELECT id, title, description, long_description, city, kind, category,
               group_name, price, duration, images, highlights, included,
               not_included, featured, created_at
        FROM experiences
        WHERE ($1::boolean IS NULL OR featured = $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(featured)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Update an experience (full-record overwrite)
pub async fn update(pool: &PgPool, id: Uuid, req: CreateExperience) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE experiences
        SET title = $1, description = $2, long_description = $3, city = $4,
            kind = $5, category = $6, group_name = $7, price = $8,
            duration = $9, images = $10, highlights = $11, included = $12,
            not_included = $13, featured = $14
        WHERE id = $15
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.long_description)
    .bind(city_to_string(req.city))
    .bind(kind_to_string(req.kind))
    .bind(&req.category)
    .bind(&req.group)
    .bind(req.price)
    .bind(&req.duration)
    .bind(&req.images)
    .bind(&req.highlights)
    .bind(&req.included)
    .bind(&req.not_included)
    .bind(req.featured)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an experience by ID
///
/// No cascade: reviews and bookings that reference it are left untouched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Helper Functions
// =============================================================================

fn city_to_string(city: City) -> &'static str {
    match city {
        City::Ouagadougou => "Ouagadougou",
        City::BoboDioulasso => "Bobo-Dioulasso",
    }
}

fn string_to_city(s: &str) -> City {
    match s {
        "Bobo-Dioulasso" => City::BoboDioulasso,
        _ => City::Ouagadougou,
    }
}

fn kind_to_string(kind: ExperienceKind) -> &'static str {
    match kind {
        ExperienceKind::Experience => "experience",
        ExperienceKind::Activity => "activity",
    }
}

fn string_to_kind(s: &str) -> ExperienceKind {
    match s {
        "activity" => ExperienceKind::Activity,
        _ => ExperienceKind::Experience,
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    title: String,
    description: String,
    long_description: String,
    city: String,
    kind: String,
    category: String,
    group_name: Option<String>,
    price: i64,
    duration: String,
    images: Vec<String>,
    highlights: Vec<String>,
    included: Vec<String>,
    not_included: Vec<String>,
    featured: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            title: row.title,
            description: row.description,
            long_description: row.long_description,
            city: string_to_city(&row.city),
            kind: string_to_kind(&row.kind),
            category: row.category,
            group: row.group_name,
            price: row.price,
            duration: row.duration,
            images: row.images,
            highlights: row.highlights,
            included: row.included,
            not_included: row.not_included,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}
