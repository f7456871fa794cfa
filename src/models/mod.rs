// Models module - exports all model types

mod alert;
mod dataset;
mod flight;
mod search_request;

// Re-export model types
pub use self::alert::{AirlineInfo, AlertEndpoint, FlightAlert, FlightNumber};
pub use self::dataset::FlightData;
pub use self::flight::{FlightRecord, Measure};
pub use self::search_request::{Preference, Preferences, SearchRequest};

// Common type aliases for improved code readability
pub type FlightId = String;
pub type Price = f64;
pub type Hours = f64;
pub type Score = f64;
