// Flat append-only list of saved alerts persisted as a JSON array

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::FlightAlert;

#[derive(Debug, Clone)]
pub struct AlertStore {
    path: PathBuf,
}

impl AlertStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved alerts. A missing or malformed file reads as empty.
    pub fn load(&self) -> Vec<FlightAlert> {
        let json_str = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) => {
                debug!("No alerts at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FlightAlert>>(&json_str) {
            Ok(alerts) => alerts,
            Err(e) => {
                warn!(
                    "Failed to parse alerts in {}: {}, treating as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Appends `alert` and persists the whole list. Returns the new length.
    pub fn append(&self, alert: FlightAlert) -> Result<usize> {
        let mut alerts = self.load();
        alerts.push(alert);
        self.save(&alerts)?;
        Ok(alerts.len())
    }

    /// Removes every saved alert
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    fn save(&self, alerts: &[FlightAlert]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json_str = serde_json::to_string_pretty(alerts)?;
        fs::write(&self.path, json_str).map_err(|e| Error::io(&self.path, e))?;
        debug!("Saved {} alerts to {}", alerts.len(), self.path.display());
        Ok(())
    }
}
