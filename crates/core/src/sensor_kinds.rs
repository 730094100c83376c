//! Sensor kinds known to the dashboard and their display profile.
//!
//! The kind keys double as the keys of a sensor's `thresholds` JSON column,
//! so they must stay in sync with what the settings editor writes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Threshold set key for water temperature.
pub const KIND_TEMPERATURE: &str = "temperature";

/// Threshold set key for pH level.
pub const KIND_PH: &str = "ph";

/// Threshold set key for turbidity.
pub const KIND_TURBIDITY: &str = "turbidity";

/// Threshold set key for dissolved oxygen.
pub const KIND_OXYGEN: &str = "oxygen";

/// Threshold set key for water level.
pub const KIND_WATER_LEVEL: &str = "water_level";

/// All sensor kind keys, in the order the settings editor lists them.
pub const SENSOR_KINDS: &[&str] = &[
    KIND_TEMPERATURE,
    KIND_PH,
    KIND_TURBIDITY,
    KIND_OXYGEN,
    KIND_WATER_LEVEL,
];

// ---------------------------------------------------------------------------
// SensorKind
// ---------------------------------------------------------------------------

/// The closed set of sensor kinds a widget can be parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Ph,
    Turbidity,
    Oxygen,
    WaterLevel,
}

impl SensorKind {
    /// Key used in the `thresholds` column and in sensor `type` fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => KIND_TEMPERATURE,
            Self::Ph => KIND_PH,
            Self::Turbidity => KIND_TURBIDITY,
            Self::Oxygen => KIND_OXYGEN,
            Self::WaterLevel => KIND_WATER_LEVEL,
        }
    }

    /// Measurement unit shown next to a reading.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Ph => "pH",
            Self::Turbidity => "NTU",
            Self::Oxygen => "mg/L",
            Self::WaterLevel => "cm",
        }
    }

    /// Human-readable name for card titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Ph => "pH Level",
            Self::Turbidity => "Turbidity",
            Self::Oxygen => "Dissolved Oxygen",
            Self::WaterLevel => "Water Level",
        }
    }
}

impl FromStr for SensorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_TEMPERATURE => Ok(Self::Temperature),
            KIND_PH => Ok(Self::Ph),
            KIND_TURBIDITY => Ok(Self::Turbidity),
            KIND_OXYGEN => Ok(Self::Oxygen),
            KIND_WATER_LEVEL => Ok(Self::WaterLevel),
            other => Err(CoreError::UnknownSensorKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SensorProfile
// ---------------------------------------------------------------------------

/// Per-widget configuration: one generic widget parameterized by this
/// replaces a hand-written card/table/graph per sensor kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorProfile {
    pub kind: SensorKind,
    pub unit: &'static str,
    /// Inclusive `(low, high)` range considered healthy, if the kind has one.
    pub ideal_range: Option<(f64, f64)>,
}

impl SensorProfile {
    /// Default profile for a kind, with the koi pond ideal ranges.
    pub fn for_kind(kind: SensorKind) -> Self {
        let ideal_range = match kind {
            SensorKind::Temperature => Some((24.0, 27.0)),
            SensorKind::Ph => Some((6.8, 7.6)),
            SensorKind::Turbidity => Some((0.0, 10.0)),
            SensorKind::WaterLevel => Some((50.0, 70.0)),
            SensorKind::Oxygen => None,
        };
        Self {
            kind,
            unit: kind.unit(),
            ideal_range,
        }
    }

    /// Whether `value` falls inside the ideal range. Kinds without an ideal
    /// range accept every value.
    pub fn is_ideal(&self, value: f64) -> bool {
        match self.ideal_range {
            Some((low, high)) => (low..=high).contains(&value),
            None => true,
        }
    }

    /// Render a reading with one decimal and the kind's unit, e.g. `"21.4 °C"`.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.1} {}", self.unit)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_to_its_kind() {
        for key in SENSOR_KINDS {
            let kind: SensorKind = key.parse().unwrap();
            assert_eq!(kind.as_str(), *key);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("salinity".parse::<SensorKind>().is_err());
    }

    #[test]
    fn serde_uses_threshold_keys() {
        let json = serde_json::to_string(&SensorKind::WaterLevel).unwrap();
        assert_eq!(json, "\"water_level\"");
    }

    #[test]
    fn profile_checks_ideal_range_inclusively() {
        let profile = SensorProfile::for_kind(SensorKind::Temperature);
        assert!(profile.is_ideal(24.0));
        assert!(profile.is_ideal(27.0));
        assert!(!profile.is_ideal(23.9));
        assert!(!profile.is_ideal(27.1));
    }

    #[test]
    fn profile_without_range_accepts_everything() {
        let profile = SensorProfile::for_kind(SensorKind::Oxygen);
        assert!(profile.is_ideal(-1000.0));
    }

    #[test]
    fn format_value_uses_unit() {
        let profile = SensorProfile::for_kind(SensorKind::Temperature);
        assert_eq!(profile.format_value(21.44), "21.4 °C");
    }
}
