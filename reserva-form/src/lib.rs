pub mod fields;
pub mod request;
pub mod snapshot;
pub mod state;
pub mod validate;

pub use fields::{Field, PassengerField, ScalarField};
pub use request::{PassengerRecord, TripRequest};
pub use snapshot::FormSnapshot;
pub use state::{FieldInput, FormPhase, FormSubmission, ReservationFormState, SubmitError};
pub use validate::{Rule, Violation};
