// Alert model representing a saved flight-status record

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One end of a flight as reported by the status lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertEndpoint {
    pub airport: String,
    pub iata: String,
    pub icao: String,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    /// RFC 3339 scheduled time
    pub scheduled: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    pub name: String,
    pub iata: String,
    pub icao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightNumber {
    pub number: String,
}

/// A flight the user asked to be alerted about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightAlert {
    pub flight_date: String,
    pub flight_status: String,
    pub departure: AlertEndpoint,
    pub arrival: AlertEndpoint,
    pub airline: AirlineInfo,
    pub flight: FlightNumber,
}

impl FlightAlert {
    /// Scheduled departure, if the status record carries a parseable one
    pub fn scheduled_departure(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.departure.scheduled).ok()
    }

    /// Human readable countdown to departure relative to `now`
    pub fn time_until_departure<Tz: chrono::TimeZone>(&self, now: DateTime<Tz>) -> Option<String> {
        let departure = self.scheduled_departure()?;
        let remaining = departure.signed_duration_since(now);

        if remaining.num_milliseconds() <= 0 {
            return Some("Flight has already taken off".to_string());
        }

        let hours = remaining.num_hours();
        let minutes = remaining.num_minutes() % 60;
        Some(format!("{}h {}m remaining", hours, minutes))
    }

    /// Short label such as "IndiGo 6E204"
    pub fn label(&self) -> String {
        format!("{} {}", self.airline.name, self.flight.number)
    }
}
