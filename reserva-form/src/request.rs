use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reserva_shared::Masked;

use crate::fields::{PassengerField, ScalarField};
use crate::validate::FieldValue;

/// The full set of fields describing one booking attempt.
///
/// Text controls store the raw user input even when it is invalid, so the
/// rendering layer can show the value next to its inline error. National id,
/// email and phone are masked in Debug/log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub id: Uuid,
    pub full_name: String,
    pub national_id: Masked<String>,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub birth_date: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub trip_type: String,
    pub travel_class: String,
    pub passenger_count: i32,
    pub additional_passengers: Vec<PassengerRecord>,
    pub accepted_terms: bool,
    pub newsletter: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripRequest {
    /// Fresh request for a new form session: one passenger (the holder),
    /// nothing accepted, everything else empty.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name: String::new(),
            national_id: Masked::default(),
            email: Masked::default(),
            phone: Masked::default(),
            birth_date: String::new(),
            destination: String::new(),
            departure_date: String::new(),
            return_date: String::new(),
            trip_type: String::new(),
            travel_class: String::new(),
            passenger_count: 1,
            additional_passengers: Vec::new(),
            accepted_terms: false,
            newsletter: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Value of a scalar control, as the validators see it.
    pub fn value_of(&self, field: ScalarField) -> FieldValue<'_> {
        match field {
            ScalarField::FullName => FieldValue::Text(&self.full_name),
            ScalarField::NationalId => FieldValue::Text(&self.national_id),
            ScalarField::Email => FieldValue::Text(&self.email),
            ScalarField::Phone => FieldValue::Text(&self.phone),
            ScalarField::BirthDate => FieldValue::Text(&self.birth_date),
            ScalarField::Destination => FieldValue::Text(&self.destination),
            ScalarField::DepartureDate => FieldValue::Text(&self.departure_date),
            ScalarField::ReturnDate => FieldValue::Text(&self.return_date),
            ScalarField::TripType => FieldValue::Text(&self.trip_type),
            ScalarField::TravelClass => FieldValue::Text(&self.travel_class),
            ScalarField::PassengerCount => FieldValue::Count(self.passenger_count),
            ScalarField::AcceptedTerms => FieldValue::Flag(self.accepted_terms),
            ScalarField::Newsletter => FieldValue::Flag(self.newsletter),
        }
    }
}

impl Default for TripRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// One additional traveler. Created and destroyed only by the passenger-list
/// synchronization; age stays raw text so out-of-range input can be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub name: String,
    pub age: String,
    pub relation_to_holder: String,
}

impl PassengerRecord {
    pub fn value_of(&self, field: PassengerField) -> &str {
        match field {
            PassengerField::Name => &self.name,
            PassengerField::Age => &self.age,
            PassengerField::Relation => &self.relation_to_holder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_defaults() {
        let request = TripRequest::new();
        assert_eq!(request.passenger_count, 1);
        assert!(request.additional_passengers.is_empty());
        assert!(!request.accepted_terms);
        assert!(!request.newsletter);
        assert_eq!(request.full_name, "");
    }

    #[test]
    fn debug_output_masks_personal_data() {
        let mut request = TripRequest::new();
        request.national_id = Masked::new("12345678Z".to_string());
        request.email = Masked::new("holder@example.com".to_string());

        let debug = format!("{:?}", request);
        assert!(!debug.contains("12345678Z"));
        assert!(!debug.contains("holder@example.com"));
    }

    #[test]
    fn serialization_keeps_personal_data_for_the_renderer() {
        let mut request = TripRequest::new();
        request.email = Masked::new("holder@example.com".to_string());

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("holder@example.com"));
    }
}
