//! Booking API Handlers
//!
//! HTTP endpoints for booking request intake and handling.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use kuuni_core::domain::booking::{BookingRequest, BookingStatus};
use kuuni_core::dto::booking::{CreateBooking, UpdateBookingStatus};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::booking_service;

/// POST /api/bookings
/// Create a booking request from the public form
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBooking>,
) -> ApiResult<Json<BookingRequest>> {
    tracing::info!("Booking request for experience: {}", req.experience_id);

    let booking = booking_service::create_booking(&state.pool, req)
        .await
        .map_err(|e| match e {
            booking_service::BookingError::ValidationError(msg) => ApiError::BadRequest(msg),
            booking_service::BookingError::DatabaseError(err) => ApiError::DatabaseError(err),
            booking_service::BookingError::NotFound(id) => {
                ApiError::NotFound(format!("Booking {} not found", id))
            }
        })?;

    Ok(Json(booking))
}

/// GET /api/bookings
/// List booking requests, newest first
///
/// Query parameters:
/// - `status` (optional): only return bookings in this handling status
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingsQuery>,
) -> ApiResult<Json<Vec<BookingRequest>>> {
    tracing::debug!("Listing bookings");

    let bookings = booking_service::list_bookings(&state.pool, params.status)
        .await
        .map_err(|e| match e {
            booking_service::BookingError::DatabaseError(err) => ApiError::DatabaseError(err),
            booking_service::BookingError::NotFound(id) => {
                ApiError::NotFound(format!("Booking {} not found", id))
            }
            booking_service::BookingError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(bookings))
}

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub status: Option<BookingStatus>,
}

/// GET /api/bookings/{id}
/// Get booking request by ID
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<BookingRequest>> {
    tracing::debug!("Getting booking: {}", id);

    let booking = booking_service::get_booking(&state.pool, id)
        .await
        .map_err(|e| match e {
            booking_service::BookingError::NotFound(id) => {
                ApiError::NotFound(format!("Booking {} not found", id))
            }
            booking_service::BookingError::DatabaseError(err) => ApiError::DatabaseError(err),
            booking_service::BookingError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(booking))
}

/// PUT /api/bookings/{id}/status
/// Set the handling status of a booking request
pub async fn set_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookingStatus>,
) -> ApiResult<Json<BookingRequest>> {
    tracing::info!("Setting booking {} status to {}", id, req.status);

    let booking = booking_service::set_booking_status(&state.pool, id, req.status)
        .await
        .map_err(|e| match e {
            booking_service::BookingError::NotFound(id) => {
                ApiError::NotFound(format!("Booking {} not found", id))
            }
            booking_service::BookingError::DatabaseError(err) => ApiError::DatabaseError(err),
            booking_service::BookingError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(booking))
}

/// DELETE /api/bookings/{id}
/// Delete a booking request
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting booking: {}", id);

    booking_service::delete_booking(&state.pool, id)
        .await
        .map_err(|e| match e {
            booking_service::BookingError::NotFound(id) => {
                ApiError::NotFound(format!("Booking {} not found", id))
            }
            booking_service::BookingError::DatabaseError(err) => ApiError::DatabaseError(err),
            booking_service::BookingError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
