//! Threshold band data model.
//!
//! A sensor's `thresholds` column holds, per sensor kind, an ordered array of
//! named bands. Order is priority: the matcher takes the first band whose
//! bounds contain a value, so two overlapping bands resolve by position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;
use crate::sensor_kinds::SensorKind;

// ---------------------------------------------------------------------------
// ThresholdColor
// ---------------------------------------------------------------------------

/// Badge color attached to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdColor {
    #[default]
    None,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

/// Background and foreground hex colors for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl ThresholdColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Dark-theme badge colors (800 shade background, 300 shade text).
    pub fn style(self) -> BadgeStyle {
        let (background, foreground) = match self {
            Self::Blue => ("#1e40af", "#93c5fd"),
            Self::Green => ("#166534", "#86efac"),
            Self::Yellow => ("#854d0e", "#fde047"),
            Self::Orange => ("#9a3412", "#fdba74"),
            Self::Red => ("#991b1b", "#fca5a5"),
            Self::None => ("#4b5563", "#d1d5db"),
        };
        BadgeStyle {
            background,
            foreground,
        }
    }
}

// ---------------------------------------------------------------------------
// ThresholdBand
// ---------------------------------------------------------------------------

/// A named numeric range. A missing bound is open on that side; a band with
/// neither bound matches every value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub color: ThresholdColor,
}

impl ThresholdBand {
    pub fn new(name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            color: ThresholdColor::None,
        }
    }

    pub fn with_color(mut self, color: ThresholdColor) -> Self {
        self.color = color;
        self
    }

    /// Inclusive containment check on both present bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Point used to measure distance when no band contains a value: the
    /// midpoint when both bounds exist, else the single bound, else zero.
    pub fn reference_point(&self) -> f64 {
        match (self.min, self.max) {
            (Some(min), Some(max)) => (min + max) / 2.0,
            (Some(bound), None) | (None, Some(bound)) => bound,
            (None, None) => 0.0,
        }
    }

    /// Whether the band has no bounds at all.
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Tooltip text describing the band's range, e.g. `"normal: 18-27 °C"`.
    pub fn describe(&self, unit: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{}: {min}-{max} {unit}", self.name),
            (Some(min), None) => format!("{}: ≥ {min} {unit}", self.name),
            (None, Some(max)) => format!("{}: ≤ {max} {unit}", self.name),
            (None, None) => format!("Status: {}", self.name),
        }
    }
}

// ---------------------------------------------------------------------------
// ThresholdSet
// ---------------------------------------------------------------------------

/// Ordered band lists keyed by sensor kind key (`temperature`, `ph`, ...).
///
/// Deserializes leniently from the raw `thresholds` column: entries that are
/// not arrays (the retired fixed `{cold, normal, warm, hot}` object shape) are
/// skipped, so those kinds behave as if unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ThresholdSet {
    bands: BTreeMap<String, Vec<ThresholdBand>>,
}

impl ThresholdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the band list for `kind`.
    pub fn insert(&mut self, kind: SensorKind, bands: Vec<ThresholdBand>) {
        self.bands.insert(kind.as_str().to_string(), bands);
    }

    pub fn with_bands(mut self, kind: SensorKind, bands: Vec<ThresholdBand>) -> Self {
        self.insert(kind, bands);
        self
    }

    /// Bands configured for `kind`; empty when the kind is absent.
    pub fn bands(&self, kind: SensorKind) -> &[ThresholdBand] {
        self.bands_for_key(kind.as_str())
    }

    /// Bands configured under a raw key; empty when the key is absent.
    pub fn bands_for_key(&self, key: &str) -> &[ThresholdBand] {
        self.bands.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parse a `thresholds` column value.
    ///
    /// `null` and non-object values yield an empty set. An array entry whose
    /// items do not parse as bands is a validation error.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let mut set = Self::new();
        let Some(obj) = value.as_object() else {
            return Ok(set);
        };

        for (key, entry) in obj {
            if !entry.is_array() {
                tracing::warn!(kind = %key, "Ignoring non-array threshold entry");
                continue;
            }
            let bands: Vec<ThresholdBand> = serde_json::from_value(entry.clone())
                .map_err(|e| CoreError::Validation(format!("thresholds.{key}: {e}")))?;
            set.bands.insert(key.clone(), bands);
        }

        Ok(set)
    }
}

impl Serialize for ThresholdSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bands.serialize(serializer)
    }
}

impl TryFrom<serde_json::Value> for ThresholdSet {
    type Error = CoreError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -- ThresholdBand -------------------------------------------------------

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let band = ThresholdBand::new("normal", Some(18.0), Some(27.0));
        assert!(band.contains(18.0));
        assert!(band.contains(27.0));
        assert!(!band.contains(17.99));
        assert!(!band.contains(27.01));
    }

    #[test]
    fn open_band_contains_everything() {
        let band = ThresholdBand::new("any", None, None);
        assert!(band.is_open());
        assert!(band.contains(f64::MIN));
        assert!(band.contains(f64::MAX));
    }

    #[test]
    fn reference_point_per_bound_shape() {
        assert_eq!(ThresholdBand::new("a", Some(10.0), Some(20.0)).reference_point(), 15.0);
        assert_eq!(ThresholdBand::new("b", Some(10.0), None).reference_point(), 10.0);
        assert_eq!(ThresholdBand::new("c", None, Some(20.0)).reference_point(), 20.0);
        assert_eq!(ThresholdBand::new("d", None, None).reference_point(), 0.0);
    }

    #[test]
    fn describe_renders_each_bound_shape() {
        assert_eq!(
            ThresholdBand::new("normal", Some(18.0), Some(27.0)).describe("°C"),
            "normal: 18-27 °C"
        );
        assert_eq!(
            ThresholdBand::new("hot", Some(27.0), None).describe("°C"),
            "hot: ≥ 27 °C"
        );
        assert_eq!(
            ThresholdBand::new("cold", None, Some(18.5)).describe("°C"),
            "cold: ≤ 18.5 °C"
        );
        assert_eq!(ThresholdBand::new("any", None, None).describe("°C"), "Status: any");
    }

    #[test]
    fn band_deserializes_without_optional_fields() {
        let band: ThresholdBand = serde_json::from_value(json!({ "name": "cold", "max": 18 })).unwrap();
        assert_eq!(band.min, None);
        assert_eq!(band.max, Some(18.0));
        assert_eq!(band.color, ThresholdColor::None);
    }

    #[test]
    fn band_serialization_omits_absent_bounds() {
        let band = ThresholdBand::new("hot", Some(27.0), None).with_color(ThresholdColor::Red);
        let value = serde_json::to_value(&band).unwrap();
        assert_eq!(value, json!({ "name": "hot", "min": 27.0, "color": "red" }));
    }

    #[test]
    fn badge_style_falls_back_to_gray() {
        assert_eq!(ThresholdColor::None.style().background, "#4b5563");
        assert_eq!(ThresholdColor::Red.style().foreground, "#fca5a5");
    }

    // -- ThresholdSet --------------------------------------------------------

    #[test]
    fn absent_kind_yields_empty_slice() {
        let set = ThresholdSet::new();
        assert!(set.bands(SensorKind::Ph).is_empty());
    }

    #[test]
    fn from_json_reads_array_entries_in_order() {
        let set = ThresholdSet::from_json(&json!({
            "temperature": [
                { "name": "cold", "max": 18, "color": "blue" },
                { "name": "normal", "min": 18, "max": 27, "color": "green" },
                { "name": "hot", "min": 27, "color": "red" }
            ]
        }))
        .unwrap();

        let names: Vec<&str> = set
            .bands(SensorKind::Temperature)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["cold", "normal", "hot"]);
    }

    #[test]
    fn from_json_skips_legacy_object_shape() {
        let set = ThresholdSet::from_json(&json!({
            "temperature": { "cold": { "max": 18 }, "hot": { "min": 27 } },
            "ph": [{ "name": "neutral", "min": 6.5, "max": 8.5 }]
        }))
        .unwrap();

        assert!(set.bands(SensorKind::Temperature).is_empty());
        assert_eq!(set.bands(SensorKind::Ph).len(), 1);
    }

    #[test]
    fn from_json_null_is_empty() {
        let set = ThresholdSet::from_json(&serde_json::Value::Null).unwrap();
        assert_eq!(set, ThresholdSet::new());
    }

    #[test]
    fn serializes_as_plain_kind_map() {
        let set = ThresholdSet::new().with_bands(
            SensorKind::Ph,
            vec![ThresholdBand::new("neutral", Some(6.5), Some(8.5))],
        );
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value, json!({ "ph": [{ "name": "neutral", "min": 6.5, "max": 8.5, "color": "none" }] }));
    }

    #[test]
    fn from_json_rejects_malformed_band() {
        let result = ThresholdSet::from_json(&json!({ "ph": [{ "min": 1 }] }));
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_goes_through_lenient_parser() {
        let set: ThresholdSet = serde_json::from_value(json!({
            "turbidity": [{ "name": "clear", "max": 10 }],
            "temperature": "garbage"
        }))
        .unwrap();
        assert_eq!(set.bands(SensorKind::Turbidity).len(), 1);
        assert!(set.bands(SensorKind::Temperature).is_empty());
    }
}
