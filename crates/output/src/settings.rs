use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::Context;
use tracing::{info, Level};

/// Machine and output parameters.
///
/// Every field has a default, a settings file only needs to contain the values that differ.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispenserSettings {
    /// Distance of the board's smallest x coordinate from the machine origin (mm)
    pub offset_x: f64,
    /// Distance of the board's smallest y coordinate from the machine origin (mm)
    pub offset_y: f64,

    /// Height at which paste is dispensed (mm)
    pub z_dispensing: f64,
    /// Height when moving to the next pad (mm)
    pub z_hover: f64,
    /// Height used to separate the paste from the needle after dispensing (mm)
    pub z_high_up: f64,

    /// mm/min
    pub travel_feed_rate: u32,
    /// mm/min
    pub dispense_feed_rate: u32,

    /// Dwell time for a pad with no area (ms)
    pub minimum_dwell_ms: f64,
    /// Additional dwell time per mm² of pad area (ms)
    pub area_to_milliseconds: f64,
}

impl Default for DispenserSettings {
    fn default() -> Self {
        Self {
            offset_x: 50.0,
            offset_y: 50.0,
            z_dispensing: 0.6,
            z_hover: 2.0,
            z_high_up: 4.0,
            travel_feed_rate: 20000,
            dispense_feed_rate: 4000,
            minimum_dwell_ms: 50.0,
            area_to_milliseconds: 25.0,
        }
    }
}

impl DispenserSettings {
    pub fn dwell_ms(&self, area: f64) -> f64 {
        self.minimum_dwell_ms + area * self.area_to_milliseconds
    }
}

#[tracing::instrument(level = Level::DEBUG)]
pub fn load(settings_path: &Path) -> anyhow::Result<DispenserSettings> {
    info!("Loading settings. file: '{}'", settings_path.display());

    let file = File::open(settings_path)
        .with_context(|| format!("Error reading settings. file: {}", settings_path.display()))?;

    let settings: DispenserSettings = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Error parsing settings. file: {}", settings_path.display()))?;

    Ok(settings)
}
