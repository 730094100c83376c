//! Reading and aggregated point types shared by the bucketer and chart
//! builder.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::Timestamp;

/// A single sensor measurement as stored in the `readings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub recorded_at: Timestamp,
    pub sensor_id: String,
    /// Ingestion marks out-of-range or faulty samples invalid.
    #[serde(default = "default_is_valid")]
    pub is_valid: bool,
}

fn default_is_valid() -> bool {
    true
}

impl Reading {
    pub fn new(sensor_id: impl Into<String>, value: f64, recorded_at: Timestamp) -> Self {
        Self {
            value,
            recorded_at,
            sensor_id: sensor_id.into(),
            is_valid: true,
        }
    }
}

/// Copy out the readings marked valid, preserving order.
pub fn valid_only(readings: &[Reading]) -> Vec<Reading> {
    readings.iter().filter(|r| r.is_valid).cloned().collect()
}

/// Copy out the readings recorded in `[start, end]`, preserving order.
pub fn in_window(readings: &[Reading], start: Timestamp, end: Timestamp) -> Vec<Reading> {
    readings
        .iter()
        .filter(|r| r.recorded_at >= start && r.recorded_at <= end)
        .cloned()
        .collect()
}

/// Mean value of one time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    /// Bucket start, aligned on UTC calendar fields.
    #[serde(serialize_with = "serialize_bucket_key")]
    pub time: Timestamp,
    pub value: f64,
}

impl AggregatedPoint {
    /// Zero-padded ISO-8601 UTC rendering of the bucket start, e.g.
    /// `2024-03-05T14:00:00.000Z`. Lexicographic order on these keys equals
    /// chronological order.
    pub fn bucket_key(&self) -> String {
        bucket_key(self.time)
    }
}

/// See [`AggregatedPoint::bucket_key`].
pub fn bucket_key(time: Timestamp) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_bucket_key<S: Serializer>(time: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&bucket_key(*time))
}
