use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create experiences table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS experiences (
            id UUID PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            long_description TEXT NOT NULL,
            city VARCHAR(50) NOT NULL,
            kind VARCHAR(20) NOT NULL,
            category VARCHAR(100) NOT NULL,
            group_name VARCHAR(100),
            price BIGINT NOT NULL,
            duration VARCHAR(100) NOT NULL,
            images TEXT[] NOT NULL DEFAULT '{}',
            highlights TEXT[] NOT NULL DEFAULT '{}',
            included TEXT[] NOT NULL DEFAULT '{}',
            not_included TEXT[] NOT NULL DEFAULT '{}',
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create booking requests table.
    // experience_id is deliberately not a foreign key: bookings keep a
    // denormalized copy of the experience and must survive its deletion.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS booking_requests (
            id UUID PRIMARY KEY,
            experience_id UUID NOT NULL,
            experience_title VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(50) NOT NULL,
            number_of_people INTEGER NOT NULL,
            preferred_date VARCHAR(100) NOT NULL,
            message TEXT NOT NULL DEFAULT '',
            status VARCHAR(20) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create reviews table (same denormalization as bookings)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY,
            experience_id UUID NOT NULL,
            experience_title VARCHAR(255) NOT NULL,
            author_name VARCHAR(255) NOT NULL,
            author_email VARCHAR(255) NOT NULL,
            rating INTEGER NOT NULL,
            comment TEXT NOT NULL,
            approved BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create news table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS news (
            id UUID PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            excerpt TEXT NOT NULL,
            content TEXT NOT NULL,
            image_url TEXT,
            category VARCHAR(50) NOT NULL,
            published_at TIMESTAMPTZ NOT NULL,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            author VARCHAR(255),
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for the hot list filters
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_experiences_created_at ON experiences(created_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_experiences_featured ON experiences(featured)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_status ON booking_requests(status)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_bookings_created_at ON booking_requests(created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_experience_id ON reviews(experience_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_approved ON reviews(approved)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_news_published ON news(published)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_news_category ON news(category)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_news_published_at ON news(published_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
