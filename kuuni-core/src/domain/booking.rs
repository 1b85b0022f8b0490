//! Booking request domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's inquiry to reserve an experience
///
/// The experience id and title are denormalized at submission time, so a
/// booking survives deletion of the experience it was made for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub experience_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub number_of_people: i32,
    /// Free text, as typed into the booking form
    pub preferred_date: String,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Handling status of a booking request
///
/// Transitions are unconstrained: the admin may set any status from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Contacted,
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Contacted => write!(f, "contacted"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );

        let parsed: BookingStatus = serde_json::from_str("\"contacted\"").unwrap();
        assert_eq!(parsed, BookingStatus::Contacted);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<BookingStatus>("\"archived\"");
        assert!(result.is_err());
    }
}
