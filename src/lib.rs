// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::recommend::{rank, Recommender, ScoringConfig};
pub use algorithms::suggest::suggest;
pub use algorithms::FlightRanker;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{FlightAlert, FlightData, FlightRecord, Preference, SearchRequest};
