//! Band matching and status classification for single readings.

use super::bands::{ThresholdBand, ThresholdSet};
use crate::sensor_kinds::SensorKind;

/// Status returned by [`classify`] when no bands are configured.
pub const STATUS_UNKNOWN: &str = "Unknown";

/// Return the first band, in configuration order, whose bounds contain
/// `value`.
///
/// Overlaps are resolved by position, not by tightest fit: a later band is
/// never returned for a value an earlier band already claims.
pub fn match_band(value: f64, bands: &[ThresholdBand]) -> Option<&ThresholdBand> {
    bands.iter().find(|band| band.contains(value))
}

/// Classify `value` into a band name, falling back to the nearest band when
/// nothing contains it.
///
/// Nearness is measured from each band's [`ThresholdBand::reference_point`].
/// Ties keep the earliest band. Only an empty band list produces
/// [`STATUS_UNKNOWN`].
pub fn classify(value: f64, bands: &[ThresholdBand]) -> &str {
    if let Some(band) = match_band(value, bands) {
        return &band.name;
    }

    match nearest_band(value, bands) {
        Some(band) => {
            tracing::debug!(
                value,
                band = %band.name,
                "No band contains value, using nearest band",
            );
            &band.name
        }
        None => STATUS_UNKNOWN,
    }
}

fn nearest_band(value: f64, bands: &[ThresholdBand]) -> Option<&ThresholdBand> {
    let (first, rest) = bands.split_first()?;
    let mut closest = first;
    let mut closest_distance = (value - first.reference_point()).abs();

    for band in rest {
        let distance = (value - band.reference_point()).abs();
        if distance < closest_distance {
            closest = band;
            closest_distance = distance;
        }
    }

    Some(closest)
}

/// Capitalize the first character of a status name for display.
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ThresholdSet {
    /// [`match_band`] against the bands configured for `kind`.
    pub fn match_band(&self, kind: SensorKind, value: f64) -> Option<&ThresholdBand> {
        match_band(value, self.bands(kind))
    }

    /// [`classify`] against the bands configured for `kind`.
    pub fn classify(&self, kind: SensorKind, value: f64) -> &str {
        classify(value, self.bands(kind))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
