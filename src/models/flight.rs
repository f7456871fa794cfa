// Flight model representing a bookable offering from the candidate pool

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{FlightId, Hours, Price, Score};
use crate::utils::{parse, weekday};

/// Upper bound of the comfort scale
pub const COMFORT_SCALE_MAX: Score = 10.0;

/// A value that the feed may carry either as a number or as a display string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    /// Leading numeric value, `0` when the text carries none
    pub fn value(&self) -> f64 {
        match self {
            Measure::Number(n) if n.is_finite() => *n,
            Measure::Number(_) => 0.0,
            Measure::Text(s) => parse::leading_number_or_zero(s),
        }
    }
}

impl Default for Measure {
    fn default() -> Self {
        Measure::Number(0.0)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{}", n),
            Measure::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

/// Represents a candidate flight as it appears in the bundled feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightRecord {
    /// Unique identifier of the offering
    pub id: FlightId,

    /// Origin city
    #[serde(alias = "origin")]
    pub departure: String,

    /// Destination city
    #[serde(alias = "destination")]
    pub arrival: String,

    pub airline: String,

    /// Positive, currency-agnostic price
    pub price: Price,

    /// Flight time in hours, either numeric or a display string like "2h 30m"
    pub duration: Measure,

    pub departure_time: String,
    pub arrival_time: String,

    /// English weekday names on which the flight operates
    pub available_days: Vec<String>,

    pub stops: Measure,
    pub aircraft: String,

    /// Comfort on a 0-10 scale
    pub comfort_score: Score,

    /// Luggage allowance, e.g. "25kg" or 15
    pub luggage_allowance: Measure,

    pub meal_included: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,

    /// Editorial score used by the curated suggestion lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<Score>,

    /// Passenger rating out of 5, shown on curated lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Score>,
}

impl FlightRecord {
    /// Creates a flight on the given route with the core ranking attributes set
    pub fn new<S: Into<String>>(
        id: S,
        departure: S,
        arrival: S,
        airline: S,
        price: Price,
        duration: impl Into<Measure>,
        comfort_score: Score,
    ) -> Self {
        Self {
            id: id.into(),
            departure: departure.into(),
            arrival: arrival.into(),
            airline: airline.into(),
            price,
            duration: duration.into(),
            comfort_score,
            ..Self::default()
        }
    }

    /// Sets the operating days
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_days = days.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meal(mut self, meal_included: bool) -> Self {
        self.meal_included = meal_included;
        self
    }

    pub fn with_luggage(mut self, allowance: impl Into<Measure>) -> Self {
        self.luggage_allowance = allowance.into();
        self
    }

    pub fn with_recommendation_score(mut self, score: Score) -> Self {
        self.recommendation_score = Some(score);
        self
    }

    /// Parsed duration in hours (`0` on parse failure)
    pub fn duration_hours(&self) -> Hours {
        self.duration.value()
    }

    /// Parsed luggage allowance (`0` on parse failure)
    pub fn luggage_value(&self) -> f64 {
        self.luggage_allowance.value()
    }

    /// Checks whether the flight operates on the named weekday
    pub fn operates_on(&self, day: &str) -> bool {
        self.available_days.iter().any(|d| d == day)
    }

    /// Checks whether the flight serves the given origin and destination
    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        self.departure == origin && self.arrival == destination
    }

    /// Checks the record invariants: positive price and duration, comfort
    /// within scale and a non-empty set of valid weekday names
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRecord {
            id: self.id.clone(),
            reason,
        };

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(invalid(format!("price must be positive, got {}", self.price)));
        }
        if self.duration_hours() <= 0.0 {
            return Err(invalid(format!(
                "duration must be positive, got '{}'",
                self.duration
            )));
        }
        if !(0.0..=COMFORT_SCALE_MAX).contains(&self.comfort_score) {
            return Err(invalid(format!(
                "comfort score {} outside 0-{}",
                self.comfort_score, COMFORT_SCALE_MAX
            )));
        }
        if self.available_days.is_empty() {
            return Err(invalid("no available days".to_string()));
        }
        if let Some(day) = self
            .available_days
            .iter()
            .find(|d| !weekday::is_weekday_name(d))
        {
            return Err(invalid(format!("unknown weekday '{}'", day)));
        }
        Ok(())
    }
}
