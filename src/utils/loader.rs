use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::FlightData;

/// Loads the flight feed (`{ flights, cities }`) from a JSON file.
///
/// Records that break the flight invariants are dropped with a warning so the
/// ranking engine only ever sees well-formed flights.
pub fn load_flight_data<P: AsRef<Path>>(path: P) -> Result<FlightData> {
    let path = path.as_ref();
    info!("Loading flight data from {}...", path.display());

    let json_str = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let data = parse_flight_data(&json_str)?;

    info!(
        "Loaded {} flights across {} cities",
        data.flights.len(),
        data.cities.len()
    );
    Ok(data)
}

/// Same as [`load_flight_data`] for an in-memory feed
pub fn parse_flight_data(json_str: &str) -> Result<FlightData> {
    let mut data: FlightData = serde_json::from_str(json_str)?;

    let before = data.flights.len();
    data.flights.retain(|flight| match flight.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!("Skipping flight: {}", e);
            false
        }
    });
    let dropped = before - data.flights.len();
    if dropped > 0 {
        warn!("Dropped {} of {} flight records", dropped, before);
    }

    data.derive_cities();
    Ok(data)
}
