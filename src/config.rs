use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::algorithms::recommend::ScoringConfig;

pub const DEFAULT_FLIGHT_DATA_PATH: &str = "data/flights.json";
pub const DEFAULT_ALERTS_PATH: &str = "alerts.json";

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub flight_data_path: PathBuf,
    pub alerts_path: PathBuf,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flight_data_path: PathBuf::from(DEFAULT_FLIGHT_DATA_PATH),
            alerts_path: PathBuf::from(DEFAULT_ALERTS_PATH),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    /// Reads `FLIGHT_DATA_PATH`, `ALERTS_PATH`, `SCORING_PRICE_CAP` and
    /// `SCORING_DURATION_CAP`, keeping the default for anything unset or invalid
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with a custom variable lookup
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let scoring = ScoringConfig {
            price_cap: positive(
                "SCORING_PRICE_CAP",
                try_load(&lookup, "SCORING_PRICE_CAP", defaults.scoring.price_cap),
                defaults.scoring.price_cap,
            ),
            duration_cap: positive(
                "SCORING_DURATION_CAP",
                try_load(&lookup, "SCORING_DURATION_CAP", defaults.scoring.duration_cap),
                defaults.scoring.duration_cap,
            ),
            ..defaults.scoring
        };

        Self {
            flight_data_path: try_load(&lookup, "FLIGHT_DATA_PATH", defaults.flight_data_path),
            alerts_path: try_load(&lookup, "ALERTS_PATH", defaults.alerts_path),
            scoring,
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default:?}");
        default
    })
}

// Caps divide scores, zero or negative would flip or blow up the composite
fn positive(key: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{key} must be positive, got {value}, using default: {default}");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_from(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.scoring.price_cap, 5000.0);
        assert_eq!(config.scoring.duration_cap, 5.0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::load_from(lookup(&[
            ("FLIGHT_DATA_PATH", "/srv/flights.json"),
            ("SCORING_PRICE_CAP", "10000"),
            ("SCORING_DURATION_CAP", " 8.5 "),
        ]));
        assert_eq!(config.flight_data_path, PathBuf::from("/srv/flights.json"));
        assert_eq!(config.alerts_path, PathBuf::from(DEFAULT_ALERTS_PATH));
        assert_eq!(config.scoring.price_cap, 10000.0);
        assert_eq!(config.scoring.duration_cap, 8.5);
        assert_eq!(config.scoring.price_weight, 0.4);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::load_from(lookup(&[
            ("SCORING_PRICE_CAP", "lots"),
            ("SCORING_DURATION_CAP", "0"),
        ]));
        assert_eq!(config.scoring.price_cap, 5000.0);
        assert_eq!(config.scoring.duration_cap, 5.0);
    }
}
