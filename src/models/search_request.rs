// Search request model representing one user query against the candidate pool

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::weekday;

/// Ranking strategy selected for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Weighted composite of price, comfort and duration
    #[default]
    Balanced,
    Cost,
    Comfort,
    Duration,
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preference::Balanced => "balanced",
            Preference::Cost => "cost",
            Preference::Comfort => "comfort",
            Preference::Duration => "duration",
        };
        f.write_str(name)
    }
}

impl FromStr for Preference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" | "none" => Ok(Preference::Balanced),
            "cost" | "price" => Ok(Preference::Cost),
            "comfort" => Ok(Preference::Comfort),
            "duration" | "time" => Ok(Preference::Duration),
            other => Err(Error::InvalidRequest(format!(
                "unknown preference '{}'",
                other
            ))),
        }
    }
}

/// Flag form of the preference as submitted by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub prioritize_cost: bool,
    pub prioritize_comfort: bool,
    pub prioritize_duration: bool,
}

impl From<Preferences> for Preference {
    /// Takes the first set flag in cost, comfort, duration order
    fn from(flags: Preferences) -> Self {
        if flags.prioritize_cost {
            Preference::Cost
        } else if flags.prioritize_comfort {
            Preference::Comfort
        } else if flags.prioritize_duration {
            Preference::Duration
        } else {
            Preference::Balanced
        }
    }
}

impl From<Option<Preferences>> for Preference {
    fn from(flags: Option<Preferences>) -> Self {
        flags.map(Preference::from).unwrap_or_default()
    }
}

impl From<Preference> for Preferences {
    fn from(preference: Preference) -> Self {
        Preferences {
            prioritize_cost: preference == Preference::Cost,
            prioritize_comfort: preference == Preference::Comfort,
            prioritize_duration: preference == Preference::Duration,
        }
    }
}

/// A single search over the candidate pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Origin city
    pub origin: String,

    /// Destination city, always different from the origin
    pub destination: String,

    /// Calendar date of travel
    pub date: NaiveDate,

    #[serde(default)]
    pub preference: Preference,
}

impl SearchRequest {
    /// Creates a balanced search, rejecting empty or identical cities
    pub fn new<S: Into<String>>(origin: S, destination: S, date: NaiveDate) -> Result<Self> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "origin and destination are required".to_string(),
            ));
        }
        if origin == destination {
            return Err(Error::InvalidRequest(
                "departure and arrival cities cannot be the same".to_string(),
            ));
        }

        Ok(Self {
            origin,
            destination,
            date,
            preference: Preference::Balanced,
        })
    }

    /// Creates a search from a `YYYY-MM-DD` date string
    pub fn parse<S: Into<String>>(origin: S, destination: S, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|source| {
            Error::InvalidDate {
                input: date.to_string(),
                source,
            }
        })?;
        Self::new(origin, destination, parsed)
    }

    pub fn with_preference(mut self, preference: impl Into<Preference>) -> Self {
        self.preference = preference.into();
        self
    }

    /// English weekday name of the travel date
    pub fn weekday(&self) -> &'static str {
        weekday::english_name(self.date)
    }
}
