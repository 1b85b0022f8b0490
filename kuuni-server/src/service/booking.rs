//! Booking Service
//!
//! Business logic for booking request intake and handling.

use kuuni_core::domain::booking::{BookingRequest, BookingStatus};
use kuuni_core::dto::booking::CreateBooking;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::booking_repository;

/// Service error type
#[derive(Debug)]
pub enum BookingError {
    NotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

/// Create a new booking request from the public form
///
/// There is no idempotency key: a double form submit creates duplicate rows.
pub async fn create_booking(pool: &PgPool, req: CreateBooking) -> Result<BookingRequest> {
    // Validate request
    validate_booking_request(&req)?;

    let booking = booking_repository::create(pool, req).await?;

    tracing::info!(
        "Booking request received: {} for {} ({})",
        booking.name,
        booking.experience_title,
        booking.id
    );

    Ok(booking)
}

/// Get a booking request by ID
pub async fn get_booking(pool: &PgPool, id: Uuid) -> Result<BookingRequest> {
    let booking = booking_repository::find_by_id(pool, id)
        .await?
        .ok_or(BookingError::NotFound(id))?;

    Ok(booking)
}

/// List booking requests, optionally filtered by status
pub async fn list_bookings(
    pool: &PgPool,
    status: Option<BookingStatus>,
) -> Result<Vec<BookingRequest>> {
    let bookings = booking_repository::list(pool, status).await?;
    Ok(bookings)
}

/// Set the handling status of a booking request
///
/// Transitions are unconstrained: any status may be set from any other.
pub async fn set_booking_status(
    pool: &PgPool,
    id: Uuid,
    status: BookingStatus,
) -> Result<BookingRequest> {
    let updated = booking_repository::update_status(pool, id, status).await?;

    if !updated {
        return Err(BookingError::NotFound(id));
    }

    tracing::info!("Booking {} status set to {}", id, status);

    get_booking(pool, id).await
}

/// Delete a booking request
pub async fn delete_booking(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = booking_repository::delete(pool, id).await?;

    if !deleted {
        return Err(BookingError::NotFound(id));
    }

    tracing::info!("Booking deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_booking_request(req: &CreateBooking) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "Name cannot be empty".to_string(),
        ));
    }

    if req.email.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "Email cannot be empty".to_string(),
        ));
    }

    if req.phone.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "Phone cannot be empty".to_string(),
        ));
    }

    if req.number_of_people < 1 {
        return Err(BookingError::ValidationError(
            "Number of people must be at least 1".to_string(),
        ));
    }

    if req.preferred_date.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "Preferred date cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBooking {
        CreateBooking {
            experience_id: Uuid::new_v4(),
            experience_title: "Balade au marché central".to_string(),
            name: "Awa Traoré".to_string(),
            email: "awa@example.com".to_string(),
            phone: "+226 70 00 00 00".to_string(),
            number_of_people: 2,
            preferred_date: "2025-03-15".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_validate_empty_name() {
        let mut req = valid_request();
        req.name = "".to_string();

        let result = validate_booking_request(&req);
        assert!(matches!(result, Err(BookingError::ValidationError(_))));
    }

    #[test]
    fn test_validate_zero_people() {
        let mut req = valid_request();
        req.number_of_people = 0;

        let result = validate_booking_request(&req);
        assert!(matches!(result, Err(BookingError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let result = validate_booking_request(&valid_request());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_empty_message_accepted() {
        // The message field is optional free text
        let result = validate_booking_request(&valid_request());
        assert!(result.is_ok());
    }
}
