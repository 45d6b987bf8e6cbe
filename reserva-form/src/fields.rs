/// Scalar fields of the trip request, one per form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    FullName,
    NationalId,
    Email,
    Phone,
    BirthDate,
    Destination,
    DepartureDate,
    ReturnDate,
    TripType,
    TravelClass,
    PassengerCount,
    AcceptedTerms,
    Newsletter,
}

impl ScalarField {
    pub const ALL: [ScalarField; 13] = [
        ScalarField::FullName,
        ScalarField::NationalId,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::BirthDate,
        ScalarField::Destination,
        ScalarField::DepartureDate,
        ScalarField::ReturnDate,
        ScalarField::TripType,
        ScalarField::TravelClass,
        ScalarField::PassengerCount,
        ScalarField::AcceptedTerms,
        ScalarField::Newsletter,
    ];

    /// Stable key used by the rendering layer (snapshot maps, error lists).
    pub fn key(&self) -> &'static str {
        match self {
            ScalarField::FullName => "fullName",
            ScalarField::NationalId => "nationalId",
            ScalarField::Email => "email",
            ScalarField::Phone => "phone",
            ScalarField::BirthDate => "birthDate",
            ScalarField::Destination => "destination",
            ScalarField::DepartureDate => "departureDate",
            ScalarField::ReturnDate => "returnDate",
            ScalarField::TripType => "tripType",
            ScalarField::TravelClass => "travelClass",
            ScalarField::PassengerCount => "passengerCount",
            ScalarField::AcceptedTerms => "acceptedTerms",
            ScalarField::Newsletter => "newsletter",
        }
    }
}

/// Fields of one additional-passenger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassengerField {
    Name,
    Age,
    Relation,
}

impl PassengerField {
    pub const ALL: [PassengerField; 3] = [
        PassengerField::Name,
        PassengerField::Age,
        PassengerField::Relation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PassengerField::Name => "name",
            PassengerField::Age => "age",
            PassengerField::Relation => "relation",
        }
    }
}

/// Addressable form field: a scalar control or a control inside the
/// passenger list, identified by its row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scalar(ScalarField),
    Passenger(usize, PassengerField),
}

impl Field {
    /// Stable key, e.g. "email" or "passengers.2.age".
    pub fn key(&self) -> String {
        match self {
            Field::Scalar(field) => field.key().to_string(),
            Field::Passenger(index, field) => format!("passengers.{}.{}", index, field.key()),
        }
    }
}
