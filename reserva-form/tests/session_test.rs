use reserva_form::{Field, FieldInput, FormPhase, PassengerField, ReservationFormState, ScalarField};

fn text(value: &str) -> FieldInput {
    FieldInput::Text(value.to_string())
}

fn edit(form: &mut ReservationFormState, field: ScalarField, value: &str) {
    form.set_field(Field::Scalar(field), text(value));
    form.touch(Field::Scalar(field));
}

#[test]
fn full_booking_session() {
    let mut form = ReservationFormState::new();

    // Fresh session: full catalog visible, no price yet, nothing flagged.
    assert_eq!(form.filtered_destinations().len(), 6);
    assert_eq!(form.total_price(), 0);
    assert!(form.snapshot().field_errors.is_empty());

    // User narrows the destination search, then picks one.
    form.set_search_term("bar");
    assert_eq!(form.filtered_destinations(), ["Barcelona".to_string()]);
    edit(&mut form, ScalarField::Destination, "Barcelona");

    // Holder data, with one typo fixed along the way.
    edit(&mut form, ScalarField::FullName, "Ana García");
    edit(&mut form, ScalarField::NationalId, "12345678Z");
    edit(&mut form, ScalarField::Email, "ana@example");
    assert!(form.is_field_invalid(Field::Scalar(ScalarField::Email)));
    edit(&mut form, ScalarField::Email, "ana@example.com");
    assert!(!form.is_field_invalid(Field::Scalar(ScalarField::Email)));
    edit(&mut form, ScalarField::Phone, "600111222");
    edit(&mut form, ScalarField::BirthDate, "1990-04-12");
    edit(&mut form, ScalarField::DepartureDate, "2026-09-01");
    edit(&mut form, ScalarField::ReturnDate, "2026-09-10");
    edit(&mut form, ScalarField::TripType, "Ida y vuelta");
    edit(&mut form, ScalarField::TravelClass, "Primera clase");

    // Three travellers: the price follows immediately.
    form.set_passenger_count(3);
    assert_eq!(form.total_price(), 1500);
    assert_eq!(form.request().additional_passengers.len(), 2);

    // Fill both extra passengers.
    for (index, (name, age, relation)) in
        [("Luis García", "8", "Hijo"), ("Eva García", "41", "Cónyuge")]
            .into_iter()
            .enumerate()
    {
        form.set_field(Field::Passenger(index, PassengerField::Name), text(name));
        form.set_field(Field::Passenger(index, PassengerField::Age), text(age));
        form.set_field(Field::Passenger(index, PassengerField::Relation), text(relation));
    }

    // One traveller drops out: removal drives the count back down.
    form.remove_passenger(0);
    assert_eq!(form.request().passenger_count, 2);
    assert_eq!(form.total_price(), 1000);
    assert_eq!(form.request().additional_passengers[0].name, "Eva García");

    // Terms not accepted yet: submit must fail and change nothing.
    let err = form.submit().unwrap_err();
    assert!(err.to_string().contains("Validation failed"));
    assert_eq!(form.phase(), FormPhase::Editing);

    form.set_field(Field::Scalar(ScalarField::AcceptedTerms), FieldInput::Flag(true));
    let submission = form.submit().expect("valid form must submit");

    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(submission.request.destination, "Barcelona");
    assert_eq!(submission.request.passenger_count, 2);
    assert_eq!(submission.confirmation.total_price, 1000);
    assert_eq!(submission.confirmation.request_id, submission.request.id);

    // The confirmation collaborator gets a JSON-serializable payload.
    let payload = serde_json::to_value(&submission).unwrap();
    assert_eq!(payload["confirmation"]["travel_class"], "Primera clase");
    assert_eq!(payload["request"]["email"], "ana@example.com");
}

#[test]
fn snapshot_surfaces_all_touched_errors_before_submit() {
    let mut form = ReservationFormState::new();
    form.set_passenger_count(2);

    // User tabs through the holder name and the passenger age without
    // filling them in.
    form.touch(Field::Scalar(ScalarField::FullName));
    form.touch(Field::Passenger(0, PassengerField::Age));

    let snapshot = form.snapshot();
    assert_eq!(
        snapshot.field_errors.get("fullName").map(String::as_str),
        Some("Este campo es obligatorio")
    );
    assert_eq!(
        snapshot.field_errors.get("passengers.0.age").map(String::as_str),
        Some("Este campo es obligatorio")
    );

    // Untouched invalid fields stay out of the snapshot.
    assert!(!snapshot.field_errors.contains_key("email"));
}
