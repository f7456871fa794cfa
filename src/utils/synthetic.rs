// Synthetic candidate pools for benchmarks and demos

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FlightData, FlightRecord, Measure};
use crate::utils::weekday::WEEKDAY_NAMES;

const AIRLINES: [&str; 6] = ["IndiGo", "Air India", "Vistara", "SpiceJet", "GoAir", "Akasa"];
const AIRCRAFT: [&str; 4] = ["A320neo", "A321", "B737-800", "ATR 72"];

/// Generates `count` valid flights between the given cities.
///
/// Durations alternate between numeric hours and "Xh Ym" strings, luggage
/// between "NNkg" strings and plain numbers, mirroring the mixed shapes of
/// real feeds.
pub fn generate_flights<R: Rng>(
    rng: &mut R,
    cities: &[&str],
    count: usize,
) -> Vec<FlightRecord> {
    if cities.len() < 2 {
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let from = rng.gen_range(0..cities.len());
            // Shift by a non-zero offset so origin and destination differ
            let to = (from + rng.gen_range(1..cities.len())) % cities.len();

            let hours = rng.gen_range(1..6);
            let minutes = rng.gen_range(0..4) * 15;
            let duration = if i % 2 == 0 {
                Measure::Text(format!("{}h {}m", hours, minutes))
            } else {
                Measure::Number(hours as f64 + minutes as f64 / 60.0)
            };

            let kg = [7, 15, 20, 25, 30][rng.gen_range(0..5)];
            let luggage = if i % 3 == 0 {
                Measure::Number(kg as f64)
            } else {
                Measure::Text(format!("{}kg", kg))
            };

            let day_count = rng.gen_range(1..=7);
            let days: Vec<&str> = WEEKDAY_NAMES
                .choose_multiple(&mut *rng, day_count)
                .copied()
                .collect();

            let departure_hour = rng.gen_range(5..22);
            let mut flight = FlightRecord::new(
                format!("SYN-{:05}", i),
                cities[from].to_string(),
                cities[to].to_string(),
                AIRLINES[rng.gen_range(0..AIRLINES.len())].to_string(),
                // Round to whole currency units so ties show up in cost mode
                rng.gen_range(1500..9000) as f64,
                duration,
                (rng.gen_range(0..=20) as f64) / 2.0,
            )
            .with_days(days)
            .with_meal(rng.gen_bool(0.4))
            .with_luggage(luggage)
            .with_recommendation_score((rng.gen_range(50..100) as f64) / 10.0);

            flight.departure_time = format!("{:02}:00", departure_hour);
            flight.arrival_time = format!("{:02}:{:02}", (departure_hour + hours) % 24, minutes);
            flight.aircraft = AIRCRAFT[rng.gen_range(0..AIRCRAFT.len())].to_string();
            flight.stops = Measure::Number(rng.gen_range(0..2) as f64);
            flight
        })
        .collect()
}

/// Generates a full feed with the city list filled in
pub fn generate_flight_data<R: Rng>(
    rng: &mut R,
    cities: &[&str],
    count: usize,
) -> FlightData {
    let flights = generate_flights(rng, cities, count);
    FlightData::new(flights, cities.iter().map(|c| c.to_string()).collect())
}
