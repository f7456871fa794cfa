pub mod recommend;
pub mod suggest;

// Common algorithm traits
use crate::models::{FlightRecord, Preference, Score, SearchRequest};

/// Trait for flight recommendation engines
pub trait FlightRanker {
    /// Filter the pool to the request and return the matches in ranked order
    fn rank<'a>(&self, flights: &'a [FlightRecord], request: &SearchRequest)
        -> Vec<&'a FlightRecord>;

    /// Check if a flight serves the request's route on the request's weekday
    fn matches(&self, flight: &FlightRecord, request: &SearchRequest) -> bool;

    /// Ranking key of a flight under the given preference
    fn score(&self, flight: &FlightRecord, preference: Preference) -> Score;
}
