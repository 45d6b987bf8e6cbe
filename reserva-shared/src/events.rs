use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when a new form session starts.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormOpenedEvent {
    pub request_id: Uuid,
    pub opened_at: i64,
}

/// Emitted when the whole request validates and the user confirms the booking.
///
/// This is what the external confirmation collaborator receives alongside the
/// finalized request itself. Timestamps are epoch seconds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormSubmittedEvent {
    pub request_id: Uuid,
    pub destination: String,
    pub travel_class: String,
    pub passenger_count: i32,
    pub total_price: i32,
    pub submitted_at: i64,
}
