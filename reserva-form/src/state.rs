use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use reserva_catalog::{DestinationCatalog, FareTable};
use reserva_shared::{FormOpenedEvent, FormSubmittedEvent, Masked};

use crate::fields::{Field, PassengerField, ScalarField};
use crate::request::{PassengerRecord, TripRequest};
use crate::snapshot::FormSnapshot;
use crate::validate::{self, FieldValue, Violation};

/// The two end-visible states of the form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Raw value carried by one edit event from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
}

/// What a successful submit hands to the confirmation collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct FormSubmission {
    pub request: TripRequest,
    pub confirmation: FormSubmittedEvent,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Validation failed for {} field(s)", fields.len())]
    Invalid { fields: Vec<String> },

    #[error("Form was already submitted")]
    AlreadySubmitted,
}

/// Owner of the canonical form values and sole producer of the derived ones.
///
/// Every public operation runs synchronously on the caller's thread and
/// re-derives the filtered destination list and the total price before it
/// returns, so no derived value is ever observed mid-update.
pub struct ReservationFormState {
    catalog: DestinationCatalog,
    fares: FareTable,
    request: TripRequest,
    touched: HashSet<Field>,
    search_term: String,
    filtered_destinations: Vec<String>,
    total_price: i32,
    phase: FormPhase,
}

impl ReservationFormState {
    pub fn new() -> Self {
        Self::with_tables(DestinationCatalog::default(), FareTable::default())
    }

    pub fn with_tables(catalog: DestinationCatalog, fares: FareTable) -> Self {
        let request = TripRequest::new();
        let filtered_destinations = catalog.filter("");
        tracing::info!(request_id = %request.id, "form session opened");
        Self {
            catalog,
            fares,
            request,
            touched: HashSet::new(),
            search_term: String::new(),
            filtered_destinations,
            total_price: 0,
            phase: FormPhase::Editing,
        }
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Catalog entries matching the current search term, in catalog order.
    pub fn filtered_destinations(&self) -> &[String] {
        &self.filtered_destinations
    }

    /// fare(travel_class) × passenger_count for a known class, otherwise 0.
    pub fn total_price(&self) -> i32 {
        self.total_price
    }

    pub fn opened_event(&self) -> FormOpenedEvent {
        FormOpenedEvent {
            request_id: self.request.id,
            opened_at: self.request.created_at.timestamp(),
        }
    }

    /// Store one raw edit. Invalid values are stored too and only flagged,
    /// so the renderer can keep showing what the user typed.
    pub fn set_field(&mut self, field: Field, value: FieldInput) {
        match field {
            Field::Scalar(ScalarField::PassengerCount) => {
                match value {
                    FieldInput::Text(text) => match text.trim().parse::<i32>() {
                        Ok(n) => self.set_passenger_count(n),
                        Err(_) => {
                            tracing::warn!(value = %text, "ignored non-numeric passenger count edit");
                        }
                    },
                    FieldInput::Flag(_) => {
                        tracing::warn!("ignored flag edit on passenger count");
                    }
                }
                return;
            }
            Field::Scalar(scalar) => {
                if !self.store_scalar(scalar, value) {
                    tracing::warn!(field = scalar.key(), "ignored edit with mismatched value kind");
                    return;
                }
            }
            Field::Passenger(index, passenger_field) => {
                let text = match value {
                    FieldInput::Text(text) => text,
                    FieldInput::Flag(_) => {
                        tracing::warn!(index, "ignored flag edit on passenger field");
                        return;
                    }
                };
                match self.request.additional_passengers.get_mut(index) {
                    Some(record) => match passenger_field {
                        PassengerField::Name => record.name = text,
                        PassengerField::Age => record.age = text,
                        PassengerField::Relation => record.relation_to_holder = text,
                    },
                    None => {
                        tracing::warn!(index, "ignored edit on missing passenger row");
                        return;
                    }
                }
            }
        }
        self.request.updated_at = Utc::now();
        self.rederive();
    }

    /// Mark a field as interacted-with; gates inline error display.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Direct count edit: clamp to [1,10], then the count drives the list.
    pub fn set_passenger_count(&mut self, n: i32) {
        let clamped = n.clamp(1, 10);
        if clamped != n {
            tracing::debug!(requested = n, clamped, "passenger count clamped");
        }
        self.request.passenger_count = clamped;
        self.sync_passenger_list();
        self.request.updated_at = Utc::now();
        self.rederive();
    }

    /// Explicit removal: the list drives the count. Out-of-bounds is a no-op.
    pub fn remove_passenger(&mut self, index: usize) {
        if index >= self.request.additional_passengers.len() {
            tracing::debug!(index, "ignored removal of missing passenger row");
            return;
        }
        self.request.additional_passengers.remove(index);

        // Touched flags follow their record when later rows shift down.
        self.touched = self
            .touched
            .drain()
            .filter_map(|field| match field {
                Field::Passenger(i, _) if i == index => None,
                Field::Passenger(i, pf) if i > index => Some(Field::Passenger(i - 1, pf)),
                other => Some(other),
            })
            .collect();

        self.request.passenger_count = self.request.additional_passengers.len() as i32 + 1;
        self.request.updated_at = Utc::now();
        self.rederive();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.rederive();
    }

    /// Error message for a field, only once the user has touched it.
    pub fn field_error_message(&self, field: Field) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.violation_for(field).map(|v| v.message())
    }

    pub fn is_field_invalid(&self, field: Field) -> bool {
        self.touched.contains(&field) && self.violation_for(field).is_some()
    }

    /// Validate the whole request, every passenger included. On success the
    /// finalized request and its confirmation event are handed back and the
    /// phase moves to Submitted; on failure nothing is mutated.
    pub fn submit(&mut self) -> Result<FormSubmission, SubmitError> {
        if self.phase == FormPhase::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }

        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            tracing::warn!(invalid_count = invalid.len(), "submit rejected");
            return Err(SubmitError::Invalid {
                fields: invalid.iter().map(Field::key).collect(),
            });
        }

        self.phase = FormPhase::Submitted;
        let request = self.request.clone();
        let confirmation = FormSubmittedEvent {
            request_id: request.id,
            destination: request.destination.clone(),
            travel_class: request.travel_class.clone(),
            passenger_count: request.passenger_count,
            total_price: self.total_price,
            submitted_at: Utc::now().timestamp(),
        };
        tracing::info!(
            request_id = %request.id,
            destination = %request.destination,
            total_price = self.total_price,
            "reservation submitted"
        );
        Ok(FormSubmission { request, confirmation })
    }

    /// Read-only derived view for the rendering layer.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut field_errors = std::collections::BTreeMap::new();
        let mut invalid_fields = Vec::new();
        for field in self.all_fields() {
            if let Some(message) = self.field_error_message(field) {
                invalid_fields.push(field.key());
                field_errors.insert(field.key(), message);
            }
        }
        FormSnapshot {
            phase: self.phase,
            filtered_destinations: self.filtered_destinations.clone(),
            total_price: self.total_price,
            field_errors,
            invalid_fields,
        }
    }

    fn store_scalar(&mut self, field: ScalarField, value: FieldInput) -> bool {
        match (field, value) {
            (ScalarField::FullName, FieldInput::Text(t)) => self.request.full_name = t,
            (ScalarField::NationalId, FieldInput::Text(t)) => self.request.national_id = Masked::new(t),
            (ScalarField::Email, FieldInput::Text(t)) => self.request.email = Masked::new(t),
            (ScalarField::Phone, FieldInput::Text(t)) => self.request.phone = Masked::new(t),
            (ScalarField::BirthDate, FieldInput::Text(t)) => self.request.birth_date = t,
            (ScalarField::Destination, FieldInput::Text(t)) => self.request.destination = t,
            (ScalarField::DepartureDate, FieldInput::Text(t)) => self.request.departure_date = t,
            (ScalarField::ReturnDate, FieldInput::Text(t)) => self.request.return_date = t,
            (ScalarField::TripType, FieldInput::Text(t)) => self.request.trip_type = t,
            (ScalarField::TravelClass, FieldInput::Text(t)) => self.request.travel_class = t,
            (ScalarField::AcceptedTerms, FieldInput::Flag(f)) => self.request.accepted_terms = f,
            (ScalarField::Newsletter, FieldInput::Flag(f)) => self.request.newsletter = f,
            _ => return false,
        }
        true
    }

    /// Tail-append/tail-remove so mid-list edits survive count changes.
    fn sync_passenger_list(&mut self) {
        let target = (self.request.passenger_count - 1).max(0) as usize;
        while self.request.additional_passengers.len() < target {
            self.request.additional_passengers.push(PassengerRecord::default());
        }
        while self.request.additional_passengers.len() > target {
            self.request.additional_passengers.pop();
        }
        let len = self.request.additional_passengers.len();
        self.touched
            .retain(|field| !matches!(field, Field::Passenger(i, _) if *i >= len));
    }

    fn rederive(&mut self) {
        self.filtered_destinations = self.catalog.filter(&self.search_term);
        self.total_price = self
            .fares
            .total_price(&self.request.travel_class, self.request.passenger_count);
    }

    fn violation_for(&self, field: Field) -> Option<Violation> {
        match field {
            Field::Scalar(scalar) => validate::first_violation(
                self.request.value_of(scalar),
                validate::scalar_rules(scalar),
            ),
            Field::Passenger(index, passenger_field) => {
                let record = self.request.additional_passengers.get(index)?;
                validate::first_violation(
                    FieldValue::Text(record.value_of(passenger_field)),
                    validate::passenger_rules(passenger_field),
                )
            }
        }
    }

    fn all_fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = ScalarField::ALL.into_iter().map(Field::Scalar).collect();
        for index in 0..self.request.additional_passengers.len() {
            for passenger_field in PassengerField::ALL {
                fields.push(Field::Passenger(index, passenger_field));
            }
        }
        fields
    }

    fn invalid_fields(&self) -> Vec<Field> {
        self.all_fields()
            .into_iter()
            .filter(|field| self.violation_for(*field).is_some())
            .collect()
    }
}

impl Default for ReservationFormState {
    fn default() -> Self {
        Self::new()
    }
}
