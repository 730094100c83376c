//! Threshold bands and reading classification.
//!
//! All logic in this module is pure (no storage access). Callers load a
//! sensor's `thresholds` column, parse it into a [`ThresholdSet`], and
//! classify readings against it.

pub mod bands;
pub mod matcher;

pub use bands::{BadgeStyle, ThresholdBand, ThresholdColor, ThresholdSet};
pub use matcher::{classify, match_band, status_label, STATUS_UNKNOWN};
