// Flight data model representing the bundled feed of flights and cities

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::FlightRecord;

/// The candidate pool together with the selectable cities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightData {
    #[serde(default)]
    pub flights: Vec<FlightRecord>,

    #[serde(default)]
    pub cities: Vec<String>,
}

impl FlightData {
    pub fn new(flights: Vec<FlightRecord>, cities: Vec<String>) -> Self {
        Self { flights, cities }
    }

    /// Cities that can be picked as destination once `origin` is chosen
    pub fn available_destinations(&self, origin: &str) -> Vec<&str> {
        self.cities
            .iter()
            .map(String::as_str)
            .filter(|city| *city != origin)
            .collect()
    }

    /// Distinct origin/destination pairs served by the pool, sorted
    pub fn routes(&self) -> Vec<(&str, &str)> {
        self.flights
            .iter()
            .map(|f| (f.departure.as_str(), f.arrival.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fills `cities` from the pool when the feed did not list any
    pub fn derive_cities(&mut self) {
        if !self.cities.is_empty() {
            return;
        }
        let cities: BTreeSet<&str> = self
            .flights
            .iter()
            .flat_map(|f| [f.departure.as_str(), f.arrival.as_str()])
            .collect();
        self.cities = cities.into_iter().map(str::to_string).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_data() -> FlightData {
        let flights = vec![
            FlightRecord::new("1", "Delhi", "Bangalore", "IndiGo", 3500.0, 2.5, 4.5),
            FlightRecord::new("2", "Delhi", "Bangalore", "Air India", 4200.0, 2.5, 4.2),
            FlightRecord::new("3", "Pune", "Mumbai", "SpiceJet", 2500.0, 1.25, 4.0),
        ];
        FlightData::new(flights, Vec::new())
    }

    #[test]
    fn test_available_destinations() {
        let data = FlightData::new(
            Vec::new(),
            vec!["Delhi".into(), "Mumbai".into(), "Pune".into()],
        );
        assert_eq!(data.available_destinations("Mumbai"), vec!["Delhi", "Pune"]);
        assert_eq!(data.available_destinations("Goa").len(), 3);
    }

    #[test]
    fn test_routes() {
        let data = create_test_data();
        assert_eq!(
            data.routes(),
            vec![("Delhi", "Bangalore"), ("Pune", "Mumbai")]
        );
    }

    #[test]
    fn test_derive_cities() {
        let mut data = create_test_data();
        data.derive_cities();
        assert_eq!(data.cities, vec!["Bangalore", "Delhi", "Mumbai", "Pune"]);
    }

    #[test]
    fn test_deserialize_feed() {
        let data: FlightData = serde_json::from_str(r#"{"cities": ["Delhi"]}"#).unwrap();
        assert!(data.flights.is_empty());
        assert_eq!(data.cities, vec!["Delhi"]);
    }
}
