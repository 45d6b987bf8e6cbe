pub mod destination;
pub mod fares;

pub use destination::{CatalogError, DestinationCatalog};
pub use fares::{FareError, FareTable};
