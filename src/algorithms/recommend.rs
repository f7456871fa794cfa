use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::FlightRanker;
use crate::models::{FlightRecord, Hours, Preference, Price, Score, SearchRequest};

/// Normalization caps and weights used by the ranking modes.
///
/// The caps are not limits: a flight priced or timed beyond them just gets a
/// negative term in the balanced composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub price_cap: Price,
    pub duration_cap: Hours,
    pub comfort_scale: Score,
    pub price_weight: f64,
    pub comfort_weight: f64,
    pub duration_weight: f64,
    /// Bonus added to the comfort key when a meal is included
    pub meal_bonus: Score,
    /// Luggage allowance is divided by this before entering the comfort key
    pub luggage_divisor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            price_cap: 5000.0,
            duration_cap: 5.0,
            comfort_scale: 10.0,
            price_weight: 0.4,
            comfort_weight: 0.3,
            duration_weight: 0.3,
            meal_bonus: 1.0,
            luggage_divisor: 10.0,
        }
    }
}

/// Which way a ranking key is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

fn direction(preference: Preference) -> Direction {
    match preference {
        Preference::Cost | Preference::Duration => Direction::Ascending,
        Preference::Balanced | Preference::Comfort => Direction::Descending,
    }
}

/// Recommendation engine over an in-memory candidate pool
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: ScoringConfig,
}

impl Recommender {
    /// Creates a recommender with the default scoring constants
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Weighted composite of normalized price, comfort and duration
    pub fn balanced_score(&self, flight: &FlightRecord) -> Score {
        let c = &self.config;
        c.price_weight * (1.0 - flight.price / c.price_cap)
            + c.comfort_weight * (flight.comfort_score / c.comfort_scale)
            + c.duration_weight * (1.0 - flight.duration_hours() / c.duration_cap)
    }

    /// Comfort score plus meal bonus plus scaled luggage allowance
    pub fn comfort_score(&self, flight: &FlightRecord) -> Score {
        let meal = if flight.meal_included {
            self.config.meal_bonus
        } else {
            0.0
        };
        flight.comfort_score + meal + flight.luggage_value() / self.config.luggage_divisor
    }
}

impl FlightRanker for Recommender {
    fn rank<'a>(
        &self,
        flights: &'a [FlightRecord],
        request: &SearchRequest,
    ) -> Vec<&'a FlightRecord> {
        let mut scored: Vec<(Score, &'a FlightRecord)> = flights
            .iter()
            .filter(|flight| self.matches(flight, request))
            .map(|flight| (self.score(flight, request.preference), flight))
            .collect();

        // Vec::sort_by is stable, equal keys keep their pool order
        match direction(request.preference) {
            Direction::Ascending => {
                scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            }
            Direction::Descending => {
                scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal))
            }
        }

        debug!(
            pool = flights.len(),
            matched = scored.len(),
            mode = %request.preference,
            weekday = request.weekday(),
            "ranked {} -> {}",
            request.origin,
            request.destination
        );

        scored.into_iter().map(|(_, flight)| flight).collect()
    }

    fn matches(&self, flight: &FlightRecord, request: &SearchRequest) -> bool {
        flight.serves(&request.origin, &request.destination)
            && flight.operates_on(request.weekday())
    }

    fn score(&self, flight: &FlightRecord, preference: Preference) -> Score {
        match preference {
            Preference::Balanced => self.balanced_score(flight),
            Preference::Cost => flight.price,
            Preference::Comfort => self.comfort_score(flight),
            Preference::Duration => flight.duration_hours(),
        }
    }
}

/// Ranks `flights` for `request` with the default scoring constants
pub fn rank<'a>(flights: &'a [FlightRecord], request: &SearchRequest) -> Vec<&'a FlightRecord> {
    Recommender::new().rank(flights, request)
}
