pub mod events;
pub mod pii;

pub use events::{FormOpenedEvent, FormSubmittedEvent};
pub use pii::Masked;
