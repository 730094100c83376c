//! Validation for band lists written by the sensor settings editor.

use crate::error::CoreError;
use crate::thresholds::ThresholdBand;

/// Validate an ordered band list before it is saved.
///
/// Each band needs a non-blank name and finite bounds, with `min <= max` when
/// both are present. Bands with no bounds are accepted, since the matcher
/// treats them as catch-alls, but are logged because they shadow every band
/// after them.
pub fn validate_bands(bands: &[ThresholdBand]) -> Result<(), CoreError> {
    for (index, band) in bands.iter().enumerate() {
        if band.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "band {index} must have a name"
            )));
        }

        for (label, bound) in [("min", band.min), ("max", band.max)] {
            if let Some(value) = bound {
                validate_finite(value, &format!("{}.{label}", band.name))?;
            }
        }

        if let (Some(min), Some(max)) = (band.min, band.max) {
            if min > max {
                return Err(CoreError::Validation(format!(
                    "{}: min ({min}) must not exceed max ({max})",
                    band.name
                )));
            }
        }

        if band.is_open() {
            tracing::warn!(band = %band.name, index, "Band has no bounds and matches every value");
        }
    }
    Ok(())
}

/// Validate that a bound is a finite number.
fn validate_finite(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}
