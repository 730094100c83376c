//! Loading of sensor exports produced from the readings store.
//!
//! An export is one sensor row plus its readings:
//!
//! ```json
//! {
//!   "sensor": { "id": "pond-1", "type": "temperature", "thresholds": { ... } },
//!   "readings": [ { "value": 21.5, "recorded_at": "...", "sensor_id": "pond-1", "is_valid": true } ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use pondwatch_core::{Reading, ThresholdSet};
use serde::Deserialize;

/// The subset of a sensor row the report needs.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorRecord {
    pub id: String,
    /// Sensor kind key as stored; may be missing or unrecognized.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Chart interval chosen in the sensor settings (`hourly`, `daily`, ...).
    #[serde(default)]
    pub aggregation_interval: Option<String>,
    #[serde(default)]
    pub thresholds: ThresholdSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SensorExport {
    pub sensor: SensorRecord,
    #[serde(default)]
    pub readings: Vec<Reading>,
}

/// Parse an export from JSON text.
pub fn parse_export(json: &str) -> Result<SensorExport> {
    serde_json::from_str(json).context("Failed to parse sensor export")
}

/// Read and parse an export file.
pub fn load_export(path: &Path) -> Result<SensorExport> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read export {}", path.display()))?;
    let export = parse_export(&json)?;
    tracing::info!(
        sensor_id = %export.sensor.id,
        readings = export.readings.len(),
        "Loaded sensor export",
    );
    Ok(export)
}
