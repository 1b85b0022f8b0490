//! Booking request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::BookingStatus;

/// Public booking form submission
///
/// Status is not part of the request: new bookings always start as `pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub experience_id: Uuid,
    pub experience_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub number_of_people: i32,
    pub preferred_date: String,
    #[serde(default)]
    pub message: String,
}

/// Admin request to set the handling status of a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}
