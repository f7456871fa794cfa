// Integration test against the bundled flight feed in data/
use flight_recommender::models::{FlightData, FlightRecord, Preference, SearchRequest};
use flight_recommender::utils::loader::load_flight_data;
use flight_recommender::{rank, suggest, FlightRanker, Recommender};

const DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/flights.json");

fn load() -> FlightData {
    load_flight_data(DATA_PATH).expect("bundled feed should load")
}

fn ids(flights: &[&FlightRecord]) -> Vec<String> {
    flights.iter().map(|f| f.id.clone()).collect()
}

fn search(origin: &str, destination: &str, date: &str, preference: Preference) -> SearchRequest {
    SearchRequest::parse(origin, destination, date)
        .unwrap()
        .with_preference(preference)
}

#[test]
fn test_feed_loads_without_drops() {
    let data = load();
    assert_eq!(data.flights.len(), 15);
    assert_eq!(
        data.cities,
        vec!["Delhi", "Mumbai", "Bangalore", "Pune", "Kolkata"]
    );
    assert_eq!(
        data.available_destinations("Delhi"),
        vec!["Mumbai", "Bangalore", "Pune", "Kolkata"]
    );
}

#[test]
fn test_cost_scenario() {
    let data = load();
    let pair: Vec<FlightRecord> = data
        .flights
        .iter()
        .filter(|f| f.id == "DEL-BLR-1" || f.id == "DEL-BLR-2")
        .cloned()
        .collect();

    // Passed in reverse price order to make the sort do the work
    let reversed: Vec<FlightRecord> = pair.into_iter().rev().collect();
    let result = rank(
        &reversed,
        &search("Delhi", "Bangalore", "2024-05-06", Preference::Cost),
    );
    let airlines: Vec<(&str, f64)> = result
        .iter()
        .map(|f| (f.airline.as_str(), f.price))
        .collect();
    assert_eq!(airlines, vec![("IndiGo", 3500.0), ("Air India", 4200.0)]);
}

#[test]
fn test_balanced_scenario() {
    let data = load();
    let recommender = Recommender::new();
    let request = search("Delhi", "Bangalore", "2024-05-06", Preference::Balanced);

    let indigo = &data.flights[0];
    let air_india = &data.flights[1];
    let score_indigo = recommender.balanced_score(indigo);
    let score_air_india = recommender.balanced_score(air_india);
    assert!(score_indigo > score_air_india);

    let result = recommender.rank(&data.flights, &request);
    assert_eq!(result[0].id, indigo.id);
}

#[test]
fn test_monday_modes() {
    let data = load();
    // DEL-BLR-3 only flies Friday to Sunday
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-06", Preference::Cost))),
        vec!["DEL-BLR-4", "DEL-BLR-1", "DEL-BLR-2"]
    );
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-06", Preference::Duration))),
        vec!["DEL-BLR-1", "DEL-BLR-2", "DEL-BLR-4"]
    );
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-06", Preference::Comfort))),
        vec!["DEL-BLR-2", "DEL-BLR-1", "DEL-BLR-4"]
    );
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-06", Preference::Balanced))),
        vec!["DEL-BLR-1", "DEL-BLR-2", "DEL-BLR-4"]
    );
}

#[test]
fn test_friday_modes() {
    let data = load();
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-10", Preference::Balanced))),
        vec!["DEL-BLR-1", "DEL-BLR-3", "DEL-BLR-2", "DEL-BLR-4"]
    );
    assert_eq!(
        ids(&rank(&data.flights, &search("Delhi", "Bangalore", "2024-05-10", Preference::Comfort))),
        vec!["DEL-BLR-3", "DEL-BLR-2", "DEL-BLR-1", "DEL-BLR-4"]
    );
}

#[test]
fn test_no_flights_found() {
    let data = load();
    let result = rank(
        &data.flights,
        &search("Delhi", "Kolkata", "2024-05-06", Preference::Balanced),
    );
    assert!(result.is_empty());

    // Pune to Mumbai runs on weekdays with SpiceJet, weekends with GoAir
    let result = rank(
        &data.flights,
        &search("Pune", "Mumbai", "2024-05-11", Preference::Cost),
    );
    assert_eq!(ids(&result), vec!["PNE-MUM-2"]);
}

#[test]
fn test_curated_suggestions() {
    let data = load();
    assert_eq!(
        ids(&suggest(&data.flights, "Delhi", "Bangalore")),
        vec!["DEL-BLR-1", "DEL-BLR-3", "DEL-BLR-2", "DEL-BLR-4"]
    );
    assert_eq!(
        ids(&suggest(&data.flights, "Pune", "Mumbai")),
        vec!["PNE-MUM-1", "PNE-MUM-2"]
    );
}
