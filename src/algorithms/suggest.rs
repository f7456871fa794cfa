use std::cmp::Ordering;

use tracing::debug;

use crate::models::FlightRecord;

/// Curated list for a route: every flight between `origin` and `destination`
/// regardless of day, best editorial score first. Flights without a score
/// count as `0`, ties keep their pool order.
pub fn suggest<'a>(
    flights: &'a [FlightRecord],
    origin: &str,
    destination: &str,
) -> Vec<&'a FlightRecord> {
    let mut matched: Vec<&'a FlightRecord> = flights
        .iter()
        .filter(|flight| flight.serves(origin, destination))
        .collect();

    matched.sort_by(|a, b| {
        let score_a = a.recommendation_score.unwrap_or(0.0);
        let score_b = b.recommendation_score.unwrap_or(0.0);
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    });

    debug!(
        pool = flights.len(),
        matched = matched.len(),
        "suggested {} -> {}",
        origin,
        destination
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_flights() -> Vec<FlightRecord> {
        vec![
            FlightRecord::new("PNE-MUM-1", "Pune", "Mumbai", "SpiceJet", 2500.0, "1h 15m", 4.0)
                .with_recommendation_score(8.2),
            FlightRecord::new("PNE-MUM-2", "Pune", "Mumbai", "GoAir", 2800.0, "1h 15m", 3.8)
                .with_recommendation_score(8.5),
            FlightRecord::new("MUM-PNE-1", "Mumbai", "Pune", "IndiGo", 2600.0, "1h 15m", 4.3)
                .with_recommendation_score(9.9),
            FlightRecord::new("PNE-MUM-3", "Pune", "Mumbai", "Akasa", 2700.0, "1h 10m", 4.1),
        ]
    }

    #[test]
    fn test_suggest_orders_by_score() {
        let flights = create_test_flights();
        let result = suggest(&flights, "Pune", "Mumbai");
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["PNE-MUM-2", "PNE-MUM-1", "PNE-MUM-3"]);
    }

    #[test]
    fn test_suggest_ignores_days() {
        // None of the flights list operating days
        let flights = create_test_flights();
        assert_eq!(suggest(&flights, "Mumbai", "Pune").len(), 1);
        assert!(suggest(&flights, "Pune", "Delhi").is_empty());
    }
}
