//! Booking-related API endpoints

use crate::KuuniClient;
use crate::error::Result;
use kuuni_core::domain::booking::{BookingRequest, BookingStatus};
use kuuni_core::dto::booking::{CreateBooking, UpdateBookingStatus};
use uuid::Uuid;

impl KuuniClient {
    // =============================================================================
    // Booking Intake & Handling
    // =============================================================================

    /// Submit a booking request
    ///
    /// # Returns
    /// The stored booking, always in `pending` status
    pub async fn create_booking(&self, req: CreateBooking) -> Result<BookingRequest> {
        let url = format!("{}/api/bookings", self.base_url);
        let response = self.with_auth(self.client.post(&url)).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List booking requests, newest first
    ///
    /// # Arguments
    /// * `status` - When set, only bookings in this handling status
    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingRequest>> {
        let url = format!("{}/api/bookings", self.base_url);
        let mut request = self.client.get(&url);

        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }

        let response = self.with_auth(request).send().await?;

        self.handle_response(response).await
    }

    /// Get a booking request by ID
    pub async fn get_booking(&self, booking_id: Uuid) -> Result<BookingRequest> {
        let url = format!("{}/api/bookings/{}", self.base_url, booking_id);
        let response = self.with_auth(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Set the handling status of a booking request
    pub async fn set_booking_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BookingRequest> {
        let url = format!("{}/api/bookings/{}/status", self.base_url, booking_id);
        let response = self
            .with_auth(self.client.put(&url))
            .json(&UpdateBookingStatus { status })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a booking request
    pub async fn delete_booking(&self, booking_id: Uuid) -> Result<()> {
        let url = format!("{}/api/bookings/{}", self.base_url, booking_id);
        let response = self.with_auth(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
