//! Booking Repository
//!
//! Handles all database operations related to booking requests.

use kuuni_core::domain::booking::{BookingRequest, BookingStatus};
use kuuni_core::dto::booking::CreateBooking;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new booking request in the database
///
/// New bookings always enter as `pending`, regardless of what the form sends.
pub async fn create(pool: &PgPool, req: CreateBooking) -> Result<BookingRequest, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let booking = BookingRequest {
        id,
        experience_id: req.experience_id,
        experience_title: req.experience_title.clone(),
        name: req.name.clone(),
        email: req.email.clone(),
        phone: req.phone.clone(),
        number_of_people: req.number_of_people,
        preferred_date: req.preferred_date.clone(),
        message: req.message.clone(),
        status: BookingStatus::Pending,
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO booking_requests (
            id, experience_id, experience_title, name, email, phone,
            number_of_people, preferred_date, message, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(id)
    .bind(req.experience_id)
    .bind(&req.experience_title)
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.phone)
    .bind(req.number_of_people)
    .bind(&req.preferred_date)
    .bind(&req.message)
    .bind("pending")
    .bind(now)
    .execute(pool)
    .await?;

    Ok(booking)
}

/// Find a booking request by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<BookingRequest>, sqlx::Error> {
    let row = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT id, experience_id, experience_title, name, email, phone,
               number_of_people, preferred_date, message, status, created_at
        FROM booking_requests
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List booking requests, newest first, optionally filtered by status
pub async fn list(
    pool: &PgPool,
    status: Option<BookingStatus>,
) -> Result<Vec<BookingRequest>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT id, experience_id, experience_title, name, email, phone,
               number_of_people, preferred_date, message, status, created_at
        FROM booking_requests
        WHERE ($1::text IS NULL OR status = $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(status.map(status_to_string))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Set the handling status of a booking request
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: BookingStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE booking_requests
        SET status = $1
        WHERE id = $2
        "#,
    )
    .bind(status_to_string(status))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a booking request by ID
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM booking_requests WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Helper Functions
// =============================================================================

fn status_to_string(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Contacted => "contacted",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
    }
}

fn string_to_status(s: &str) -> BookingStatus {
    match s {
        "contacted" => BookingStatus::Contacted,
        "confirmed" => BookingStatus::Confirmed,
        "cancelled" => BookingStatus::Cancelled,
        _ => BookingStatus::Pending,
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    experience_id: Uuid,
    experience_title: String,
    name: String,
    email: String,
    phone: String,
    number_of_people: i32,
    preferred_date: String,
    message: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookingRow> for BookingRequest {
    fn from(row: BookingRow) -> Self {
        BookingRequest {
            id: row.id,
            experience_id: row.experience_id,
            experience_title: row.experience_title,
            name: row.name,
            email: row.email,
            phone: row.phone,
            number_of_people: row.number_of_people,
            preferred_date: row.preferred_date,
            message: row.message,
            status: string_to_status(&row.status),
            created_at: row.created_at,
        }
    }
}
